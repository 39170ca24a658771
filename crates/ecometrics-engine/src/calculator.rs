// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Phase-by-phase footprint calculation.
//!
//! The model splits a project lifecycle into four phases (development,
//! training, inference, storage & network) and accounts usage and embodied
//! CO₂ separately. Usage emissions follow energy drawn at the wall times
//! the grid intensity of the chosen region; embodied emissions amortize
//! manufacturing CO₂ over the hardware lifespan. Water is derived from
//! the total metered energy, so phases that consume no metered energy
//! (hosted APIs) contribute no water.

use ecometrics_model::{Assumptions, FootprintResult, InferenceMode, ProjectDescription};
use ecometrics_refdata::ReferenceTables;

use crate::Result;

pub(crate) const HOURS_PER_YEAR: f64 = 8760.0;

/// Short pilots are annualized against this floor so a two-week proof of
/// concept does not report an absurd per-year figure.
const ANNUAL_FLOOR_YEARS: f64 = 0.1;

/// Storage is modeled as cloud-hosted regardless of the compute choices.
const STORAGE_PUE: f64 = 1.2;

/// Region used whenever a phase has no region of its own.
const WORLD_REGION_ID: &str = "world";

/// Compute the full footprint of a project.
///
/// Validates both the project and the assumptions first, then walks the
/// four phases. Unknown hardware, region, infrastructure, or API model
/// identifiers resolve to conservative fallback entries rather than
/// failing, so a saved project survives reference-table edits.
pub fn compute_footprint(
    project: &ProjectDescription,
    assumptions: &Assumptions,
    tables: &ReferenceTables,
) -> Result<FootprintResult> {
    project.validate()?;
    assumptions.validate()?;

    let years = project.duration_years;
    let lifespan_hours = assumptions.hardware_lifespan_years * HOURS_PER_YEAR;

    // Development: one always-on workstation per declared hour. Usage is
    // billed to the training region when training is in scope, to the
    // world average otherwise. Dev energy is not metered into the total;
    // it happens on hardware the project does not operate for its users.
    let dev = &project.development;
    let dev_hw = tables.hardware_spec(&dev.hardware_id);
    let dev_pue = tables.infra_profile(&dev.infra_id).pue;
    let dev_energy_kwh = dev_hw.power_draw_kw * dev.dev_hours * dev_pue;
    let dev_region = if project.training.include {
        project.training.region_id.as_str()
    } else {
        WORLD_REGION_ID
    };
    let dev_intensity = tables.region(dev_region).gco2_per_kwh;
    let co2_development_kg = dev_energy_kwh * dev_intensity / 1000.0
        + dev_hw.embodied_kgco2e * (dev.dev_hours / lifespan_hours);

    // Training: every run re-draws the full device fleet for the declared
    // duration. Retraining cadence scales the run count with the project
    // lifetime, fractional runs included.
    let mut training_energy_kwh = 0.0;
    let mut co2_training_usage_kg = 0.0;
    let mut co2_training_embodied_kg = 0.0;
    if project.training.include {
        let t = &project.training;
        let hw = tables.hardware_spec(&t.hardware_id);
        let pue = tables.infra_profile(&t.infra_id).pue;
        let total_hours = t.duration_run_hours * t.frequency.runs_over(years);
        training_energy_kwh = hw.power_draw_kw * t.device_count as f64 * total_hours * pue;
        let intensity = tables.region(&t.region_id).gco2_per_kwh;
        co2_training_usage_kg = training_energy_kwh * intensity / 1000.0;
        co2_training_embodied_kg =
            t.device_count as f64 * hw.embodied_kgco2e * (total_hours / lifespan_hours);
    }

    // Inference: hosted APIs are accounted purely through the provider's
    // per-token factor; the provider's energy and hardware stay on the
    // provider's books. Self-hosted inference meters energy like training
    // and caps amortization at one full hardware life.
    let mut inference_annual_energy_kwh = 0.0;
    let mut co2_inference_usage_kg = 0.0;
    let mut co2_inference_embodied_kg = 0.0;
    if project.inference.include {
        let inf = &project.inference;
        match inf.mode {
            InferenceMode::HostedApi => {
                let factor = tables.api_model(&inf.api_model_id).gco2_per_1k_tokens;
                let annual_requests = inf.requests_per_day as f64 * 365.0;
                let annual_g = annual_requests * inf.tokens_per_request as f64 * factor / 1000.0;
                co2_inference_usage_kg = annual_g / 1000.0 * years;
            }
            InferenceMode::SelfHosted => {
                let hw = tables.hardware_spec(&inf.hardware_id);
                let pue = tables.infra_profile(&inf.infra_id).pue;
                let hours_per_year = if inf.always_on {
                    HOURS_PER_YEAR
                } else {
                    inf.requests_per_day as f64 * (inf.latency_ms / 1000.0) / 3600.0 * 365.0
                };
                inference_annual_energy_kwh =
                    hw.power_draw_kw * inf.device_count as f64 * hours_per_year * pue;
                let intensity = tables.region(&inf.region_id).gco2_per_kwh;
                co2_inference_usage_kg = inference_annual_energy_kwh * intensity / 1000.0 * years;
                let amortization = (hours_per_year * years / lifespan_hours).min(1.0);
                co2_inference_embodied_kg =
                    inf.device_count as f64 * hw.embodied_kgco2e * amortization;
            }
        }
    }

    // Storage & network: datasets sit in cloud storage billed at the world
    // average intensity; transfer carries its own per-gigabyte factor.
    let mut storage_annual_energy_kwh = 0.0;
    let mut co2_storage_network_kg = 0.0;
    if project.storage_network.include {
        let s = &project.storage_network;
        storage_annual_energy_kwh = s.dataset_gb * assumptions.kwh_per_gb_year_storage * STORAGE_PUE;
        let world_intensity = tables.region(WORLD_REGION_ID).gco2_per_kwh;
        let transfer_g_per_year = s.transfer_gb_per_day * 365.0 * assumptions.gco2_per_gb_transfer;
        co2_storage_network_kg = (storage_annual_energy_kwh * world_intensity / 1000.0
            + transfer_g_per_year / 1000.0)
            * years;
    }

    let total_co2_kg = co2_development_kg
        + co2_training_usage_kg
        + co2_training_embodied_kg
        + co2_inference_usage_kg
        + co2_inference_embodied_kg
        + co2_storage_network_kg;
    let total_energy_kwh = training_energy_kwh
        + inference_annual_energy_kwh * years
        + storage_annual_energy_kwh * years;
    let total_water_m3 = total_energy_kwh * assumptions.water_m3_per_mwh / 1000.0;
    let annual_co2_kg = total_co2_kg / years.max(ANNUAL_FLOOR_YEARS);

    Ok(FootprintResult {
        total_co2_kg,
        total_energy_kwh,
        total_water_m3,
        co2_development_kg,
        co2_training_usage_kg,
        co2_training_embodied_kg,
        co2_inference_usage_kg,
        co2_inference_embodied_kg,
        co2_storage_network_kg,
        annual_co2_kg,
    })
}
