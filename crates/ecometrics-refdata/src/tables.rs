// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Catalog types, curated built-in data, and fallback lookups

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Broad device family, for display and sanity checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Laptop,
    Gpu,
    CpuServer,
    Generic,
}

impl DeviceClass {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceClass::Laptop => "laptop",
            DeviceClass::Gpu => "GPU",
            DeviceClass::CpuServer => "CPU server",
            DeviceClass::Generic => "generic",
        }
    }
}

/// One hardware catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareSpec {
    pub name: String,
    /// Power draw of one unit under load (kW)
    pub power_draw_kw: f64,
    /// Manufacturing emissions of one unit (kg CO2e)
    pub embodied_kgco2e: f64,
    pub class: DeviceClass,
}

impl HardwareSpec {
    pub fn new(name: &str, power_draw_kw: f64, embodied_kgco2e: f64, class: DeviceClass) -> Self {
        Self {
            name: name.to_string(),
            power_draw_kw,
            embodied_kgco2e,
            class,
        }
    }
}

/// Grid carbon intensity of one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFactor {
    pub name: String,
    /// g CO2e emitted per kWh delivered
    pub gco2_per_kwh: f64,
}

impl RegionFactor {
    pub fn new(name: &str, gco2_per_kwh: f64) -> Self {
        Self {
            name: name.to_string(),
            gco2_per_kwh,
        }
    }
}

/// Power usage effectiveness of one infrastructure kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfraProfile {
    pub name: String,
    /// Facility energy over IT energy; 1.0 is ideal
    pub pue: f64,
}

impl InfraProfile {
    pub fn new(name: &str, pue: f64) -> Self {
        Self {
            name: name.to_string(),
            pue,
        }
    }
}

/// Emission factor of one hosted model family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiModelFactor {
    pub name: String,
    /// g CO2e per 1000 tokens processed
    pub gco2_per_1k_tokens: f64,
}

impl ApiModelFactor {
    pub fn new(name: &str, gco2_per_1k_tokens: f64) -> Self {
        Self {
            name: name.to_string(),
            gco2_per_1k_tokens,
        }
    }
}

/// Explicit entries substituted for unknown ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fallbacks {
    pub hardware: HardwareSpec,
    pub region: RegionFactor,
    pub infra: InfraProfile,
    pub api_model: ApiModelFactor,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            hardware: HardwareSpec::new("Other / unknown", 0.4, 1000.0, DeviceClass::Generic),
            region: RegionFactor::new("World Average", 475.0),
            infra: InfraProfile::new("Cloud (efficient)", 1.2),
            api_model: ApiModelFactor::new("Generic hosted model", 0.2),
        }
    }
}

/// The four catalogs plus their fallback entries.
///
/// BTreeMap keeps listings and serialized files in stable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub hardware: BTreeMap<String, HardwareSpec>,
    pub regions: BTreeMap<String, RegionFactor>,
    pub infra: BTreeMap<String, InfraProfile>,
    pub api_models: BTreeMap<String, ApiModelFactor>,
    #[serde(default)]
    pub fallbacks: Fallbacks,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceTables {
    /// Curated built-in catalogs.
    ///
    /// Hardware draw/embodied figures and regional intensities follow
    /// commonly published datacenter estimates; treat them as defaults to
    /// override with measured data where available.
    pub fn builtin() -> Self {
        let mut hardware = BTreeMap::new();
        hardware.insert(
            "laptop_std".to_string(),
            HardwareSpec::new("Standard Laptop", 0.05, 300.0, DeviceClass::Laptop),
        );
        hardware.insert(
            "gpu_h100".to_string(),
            HardwareSpec::new("NVIDIA H100", 0.7, 2500.0, DeviceClass::Gpu),
        );
        hardware.insert(
            "gpu_a100".to_string(),
            HardwareSpec::new("NVIDIA A100", 0.4, 1500.0, DeviceClass::Gpu),
        );
        hardware.insert(
            "gpu_t4".to_string(),
            HardwareSpec::new("NVIDIA T4", 0.07, 200.0, DeviceClass::Gpu),
        );
        hardware.insert(
            "gpu_rtx4090".to_string(),
            HardwareSpec::new("Consumer RTX 4090", 0.45, 250.0, DeviceClass::Gpu),
        );
        hardware.insert(
            "cpu_server".to_string(),
            HardwareSpec::new("CPU Server Standard", 0.2, 800.0, DeviceClass::CpuServer),
        );
        hardware.insert(
            "other".to_string(),
            HardwareSpec::new("Other / unknown", 0.4, 1000.0, DeviceClass::Generic),
        );

        let mut regions = BTreeMap::new();
        regions.insert("fr".to_string(), RegionFactor::new("France", 52.0));
        regions.insert("se".to_string(), RegionFactor::new("Sweden", 45.0));
        regions.insert("de".to_string(), RegionFactor::new("Germany", 350.0));
        regions.insert("eu_avg".to_string(), RegionFactor::new("EU (avg)", 275.0));
        regions.insert("us".to_string(), RegionFactor::new("USA (Average)", 367.0));
        regions.insert("cn".to_string(), RegionFactor::new("China", 550.0));
        regions.insert(
            "world".to_string(),
            RegionFactor::new("World Average", 475.0),
        );

        let mut infra = BTreeMap::new();
        infra.insert(
            "local".to_string(),
            InfraProfile::new("Local workstation", 1.0),
        );
        infra.insert("cloud".to_string(), InfraProfile::new("Cloud (efficient)", 1.2));
        infra.insert("on_prem".to_string(), InfraProfile::new("On-premise", 1.6));

        let mut api_models = BTreeMap::new();
        api_models.insert(
            "gpt35_turbo".to_string(),
            ApiModelFactor::new("GPT-3.5 Turbo", 0.2),
        );
        api_models.insert("haiku".to_string(), ApiModelFactor::new("Claude Haiku", 0.15));
        api_models.insert("flash".to_string(), ApiModelFactor::new("Gemini Flash", 0.1));
        api_models.insert(
            "generic_api".to_string(),
            ApiModelFactor::new("Generic hosted model", 0.2),
        );

        Self {
            hardware,
            regions,
            infra,
            api_models,
            fallbacks: Fallbacks::default(),
        }
    }

    /// Hardware entry for an id, or the fallback.
    pub fn hardware_spec(&self, id: &str) -> &HardwareSpec {
        self.hardware.get(id).unwrap_or(&self.fallbacks.hardware)
    }

    /// Region entry for an id, or the world-average fallback.
    pub fn region(&self, id: &str) -> &RegionFactor {
        self.regions.get(id).unwrap_or(&self.fallbacks.region)
    }

    /// Infrastructure profile for an id, or the cloud fallback.
    pub fn infra_profile(&self, id: &str) -> &InfraProfile {
        self.infra.get(id).unwrap_or(&self.fallbacks.infra)
    }

    /// API model entry for an id, or the generic fallback.
    pub fn api_model(&self, id: &str) -> &ApiModelFactor {
        self.api_models.get(id).unwrap_or(&self.fallbacks.api_model)
    }
}
