// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Tunable environmental assumptions shared by every computation

use crate::{FieldViolation, Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Global constants the calculation runs under.
///
/// These are point estimates a deployment can tune; each carries a validated
/// lower bound. Defaults follow published datacenter averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Water withdrawn per MWh of electricity (m3/MWh)
    pub water_m3_per_mwh: f64,
    /// Proxy energy per hosted-API query (kWh/query), kept for
    /// compatibility with saved records from earlier revisions
    pub api_energy_kwh_per_query: f64,
    /// Network transfer emission factor (g CO2e per GB moved)
    pub gco2_per_gb_transfer: f64,
    /// Storage energy factor (kWh per GB held for one year)
    pub kwh_per_gb_year_storage: f64,
    /// Hardware service life used for embodied-emission amortization (years)
    pub hardware_lifespan_years: f64,
    /// Tag identifying the assumption set in saved records
    pub version: String,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            water_m3_per_mwh: 0.5,
            api_energy_kwh_per_query: 0.0003,
            gco2_per_gb_transfer: 5.0,
            kwh_per_gb_year_storage: 0.0012,
            hardware_lifespan_years: 4.0,
            version: "v2-hybrid".to_string(),
        }
    }
}

impl Assumptions {
    /// Validate the set, consuming it.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Check every lower bound without mutating anything.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if !(self.water_m3_per_mwh >= 0.0) {
            violations.push(FieldViolation::new("water_m3_per_mwh", "must be >= 0"));
        }
        if !(self.api_energy_kwh_per_query >= 0.0) {
            violations.push(FieldViolation::new(
                "api_energy_kwh_per_query",
                "must be >= 0",
            ));
        }
        if !(self.gco2_per_gb_transfer >= 0.0) {
            violations.push(FieldViolation::new("gco2_per_gb_transfer", "must be >= 0"));
        }
        if !(self.kwh_per_gb_year_storage >= 0.0) {
            violations.push(FieldViolation::new(
                "kwh_per_gb_year_storage",
                "must be >= 0",
            ));
        }
        if !(self.hardware_lifespan_years >= 1.0) {
            violations.push(FieldViolation::new(
                "hardware_lifespan_years",
                "must be >= 1",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}
