// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Computed footprint breakdown

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Footprint of one project, split by phase and by usage/embodied scope.
///
/// Energy in kWh, CO2 in kg CO2e, water in m3. Every field is additive, so
/// merging sub-projects is a plain field-wise sum (see `Add`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub total_co2_kg: f64,
    pub total_energy_kwh: f64,
    pub total_water_m3: f64,
    /// Development phase, usage and embodied combined
    pub co2_development_kg: f64,
    pub co2_training_usage_kg: f64,
    pub co2_training_embodied_kg: f64,
    pub co2_inference_usage_kg: f64,
    pub co2_inference_embodied_kg: f64,
    pub co2_storage_network_kg: f64,
    /// Total CO2 over max(duration, 0.1) years
    pub annual_co2_kg: f64,
}

impl FootprintResult {
    pub const ZERO: Self = Self {
        total_co2_kg: 0.0,
        total_energy_kwh: 0.0,
        total_water_m3: 0.0,
        co2_development_kg: 0.0,
        co2_training_usage_kg: 0.0,
        co2_training_embodied_kg: 0.0,
        co2_inference_usage_kg: 0.0,
        co2_inference_embodied_kg: 0.0,
        co2_storage_network_kg: 0.0,
        annual_co2_kg: 0.0,
    };

    /// Training usage + embodied
    pub fn co2_training_kg(&self) -> f64 {
        self.co2_training_usage_kg + self.co2_training_embodied_kg
    }

    /// Inference usage + embodied
    pub fn co2_inference_kg(&self) -> f64 {
        self.co2_inference_usage_kg + self.co2_inference_embodied_kg
    }
}

impl Add for FootprintResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FootprintResult {
            total_co2_kg: self.total_co2_kg + rhs.total_co2_kg,
            total_energy_kwh: self.total_energy_kwh + rhs.total_energy_kwh,
            total_water_m3: self.total_water_m3 + rhs.total_water_m3,
            co2_development_kg: self.co2_development_kg + rhs.co2_development_kg,
            co2_training_usage_kg: self.co2_training_usage_kg + rhs.co2_training_usage_kg,
            co2_training_embodied_kg: self.co2_training_embodied_kg + rhs.co2_training_embodied_kg,
            co2_inference_usage_kg: self.co2_inference_usage_kg + rhs.co2_inference_usage_kg,
            co2_inference_embodied_kg: self.co2_inference_embodied_kg
                + rhs.co2_inference_embodied_kg,
            co2_storage_network_kg: self.co2_storage_network_kg + rhs.co2_storage_network_kg,
            annual_co2_kg: self.annual_co2_kg + rhs.annual_co2_kg,
        }
    }
}
