// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! What-if simulation over a computed footprint.
//!
//! Five percentage levers, each targeting a slice of the baseline. The
//! reductions are independent and additive: every lever takes its cut of
//! the *original* footprint's base, so overlapping levers can claim the
//! same kilogram twice and push past 100% of a base. That is the intended
//! exploratory behavior; the optimized total simply floors at zero.

use serde::{Deserialize, Serialize};

use ecometrics_model::FootprintResult;

use crate::{EngineError, Result};

/// Reduction levers, each a percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatIfLevers {
    /// Shorter prompts and responses. Applies to inference-usage CO₂.
    pub token_reduction_pct: f64,
    /// Fewer requests overall. Applies to inference-usage CO₂.
    pub traffic_reduction_pct: f64,
    /// Moving to a cleaner grid. Applies to training-usage,
    /// inference-usage, and storage/network CO₂.
    pub region_optimization_pct: f64,
    /// More efficient facilities. Same targets as the region lever.
    pub pue_improvement_pct: f64,
    /// Retraining less often. Applies to training-usage CO₂.
    pub frequency_reduction_pct: f64,
}

impl Default for WhatIfLevers {
    fn default() -> Self {
        Self {
            token_reduction_pct: 0.0,
            traffic_reduction_pct: 0.0,
            region_optimization_pct: 0.0,
            pue_improvement_pct: 0.0,
            frequency_reduction_pct: 0.0,
        }
    }
}

impl WhatIfLevers {
    fn check(&self) -> Result<()> {
        for (lever, value) in [
            ("token_reduction_pct", self.token_reduction_pct),
            ("traffic_reduction_pct", self.traffic_reduction_pct),
            ("region_optimization_pct", self.region_optimization_pct),
            ("pue_improvement_pct", self.pue_improvement_pct),
            ("frequency_reduction_pct", self.frequency_reduction_pct),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::LeverOutOfRange { lever, value });
            }
        }
        Ok(())
    }
}

/// Outcome of a what-if simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhatIfOutcome {
    pub baseline_co2_kg: f64,
    pub optimized_co2_kg: f64,
    pub absolute_reduction_kg: f64,
    pub relative_reduction_pct: f64,
}

/// Apply the levers to a baseline footprint.
///
/// The baseline is never mutated; the outcome reports totals only, since
/// the per-phase split of a hypothetical future is not meaningful.
pub fn simulate_what_if(
    footprint: &FootprintResult,
    levers: &WhatIfLevers,
) -> Result<WhatIfOutcome> {
    levers.check()?;

    let inference_base = footprint.co2_inference_usage_kg;
    let facility_base = footprint.co2_training_usage_kg
        + footprint.co2_inference_usage_kg
        + footprint.co2_storage_network_kg;
    let training_base = footprint.co2_training_usage_kg;

    let saved = levers.token_reduction_pct / 100.0 * inference_base
        + levers.traffic_reduction_pct / 100.0 * inference_base
        + levers.region_optimization_pct / 100.0 * facility_base
        + levers.pue_improvement_pct / 100.0 * facility_base
        + levers.frequency_reduction_pct / 100.0 * training_base;

    let baseline_co2_kg = footprint.total_co2_kg;
    let optimized_co2_kg = (baseline_co2_kg - saved).max(0.0);
    let absolute_reduction_kg = baseline_co2_kg - optimized_co2_kg;
    let relative_reduction_pct = if baseline_co2_kg > 0.0 {
        absolute_reduction_kg / baseline_co2_kg * 100.0
    } else {
        0.0
    };

    Ok(WhatIfOutcome {
        baseline_co2_kg,
        optimized_co2_kg,
        absolute_reduction_kg,
        relative_reduction_pct,
    })
}
