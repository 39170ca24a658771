// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Portfolio aggregation.

use ecometrics_model::FootprintResult;

use crate::{EngineError, Result};

/// Merge footprints from several projects into one by field-wise sum.
///
/// The result is synthetic: it carries no project description of its own,
/// and `annual_co2_kg` is the sum of the inputs' annual figures rather
/// than a re-derivation, since the merged projects may run over different
/// durations. Needs at least two inputs; merging one project is a caller
/// error, not a no-op.
pub fn aggregate_footprints(footprints: &[FootprintResult]) -> Result<FootprintResult> {
    if footprints.len() < 2 {
        return Err(EngineError::InsufficientFootprints(footprints.len()));
    }
    Ok(footprints
        .iter()
        .cloned()
        .fold(FootprintResult::ZERO, |acc, fp| acc + fp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint(scale: f64) -> FootprintResult {
        FootprintResult {
            total_co2_kg: 100.0 * scale,
            total_energy_kwh: 200.0 * scale,
            total_water_m3: 0.5 * scale,
            co2_development_kg: 1.0 * scale,
            co2_training_usage_kg: 40.0 * scale,
            co2_training_embodied_kg: 9.0 * scale,
            co2_inference_usage_kg: 30.0 * scale,
            co2_inference_embodied_kg: 10.0 * scale,
            co2_storage_network_kg: 10.0 * scale,
            annual_co2_kg: 50.0 * scale,
        }
    }

    #[test]
    fn test_aggregate_sums_every_field() {
        let merged = aggregate_footprints(&[footprint(1.0), footprint(2.0)]).unwrap();
        assert_eq!(merged, footprint(3.0));
    }

    #[test]
    fn test_aggregate_handles_many_inputs() {
        let inputs = vec![footprint(1.0); 10];
        let merged = aggregate_footprints(&inputs).unwrap();
        assert!((merged.total_co2_kg - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_rejects_fewer_than_two() {
        for inputs in [vec![], vec![footprint(1.0)]] {
            let err = aggregate_footprints(&inputs).unwrap_err();
            assert!(matches!(err, EngineError::InsufficientFootprints(n) if n == inputs.len()));
        }
    }
}
