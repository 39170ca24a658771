// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Eco-score derivation.
//!
//! The 0..=100 score blends a CO₂ sub-score and a water sub-score on a
//! logarithmic scale, weighted 70/30. The letter grade is read off the
//! absolute CO₂ ladder alone, so two projects with the same emissions
//! always share a grade even when their water draw differs.

use ecometrics_model::{FootprintResult, Grade, ScoreResult};

const CO2_WEIGHT: f64 = 0.7;
const WATER_WEIGHT: f64 = 0.3;

/// Score a computed footprint.
pub fn calculate_score(footprint: &FootprintResult) -> ScoreResult {
    let co2_sub = (100.0 - 20.0 * footprint.total_co2_kg.max(1.0).log10()).clamp(0.0, 100.0);
    let water_sub =
        (100.0 - 20.0 * (footprint.total_water_m3.max(0.1) * 10.0).log10()).clamp(0.0, 100.0);
    let blended = CO2_WEIGHT * co2_sub + WATER_WEIGHT * water_sub;
    let grade = Grade::from_co2_kg(footprint.total_co2_kg);
    ScoreResult::new(blended.floor() as u8, grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint_with(co2: f64, water: f64) -> FootprintResult {
        FootprintResult {
            total_co2_kg: co2,
            total_water_m3: water,
            ..FootprintResult::ZERO
        }
    }

    #[test]
    fn test_zero_footprint_scores_perfect() {
        let score = calculate_score(&footprint_with(0.0, 0.0));
        assert_eq!(score.score_100, 100);
        assert_eq!(score.grade, Grade::A);
    }

    #[test]
    fn test_blend_weights_co2_seventy_thirty() {
        // co2 100 kg -> sub 60; water 1 m3 -> sub 80; 0.7*60 + 0.3*80 = 66.
        let score = calculate_score(&footprint_with(100.0, 1.0));
        assert_eq!(score.score_100, 66);
        assert_eq!(score.grade, Grade::B);
    }

    #[test]
    fn test_score_never_goes_negative() {
        let score = calculate_score(&footprint_with(1e12, 1e9));
        assert_eq!(score.score_100, 0);
        assert_eq!(score.grade, Grade::G);
    }

    #[test]
    fn test_score_is_monotonic_in_co2() {
        let mut last = u8::MAX;
        for co2 in [0.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0] {
            let score = calculate_score(&footprint_with(co2, 0.0));
            assert!(score.score_100 <= last);
            last = score.score_100;
        }
    }

    #[test]
    fn test_grade_tracks_absolute_co2_not_water() {
        let dry = calculate_score(&footprint_with(600.0, 0.0));
        let wet = calculate_score(&footprint_with(600.0, 500.0));
        assert_eq!(dry.grade, wet.grade);
        assert!(wet.score_100 < dry.score_100);
    }
}
