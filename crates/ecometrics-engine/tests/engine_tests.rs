// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! End-to-end engine tests: worked scenarios and cross-module properties.

use ecometrics_engine::{
    aggregate_footprints, assess, calculate_score, compute_footprint, simulate_what_if,
    EngineError, WhatIfLevers,
};
use ecometrics_model::{
    Assumptions, FootprintResult, Grade, InferenceMode, InferenceSpec, ProjectDescription,
};
use ecometrics_refdata::{ApiModelFactor, ReferenceTables};

fn self_hosted_baseline() -> ProjectDescription {
    let mut project = ProjectDescription::new("Vision Service", "ML Platform");
    project.duration_years = 1.0;
    project.development.dev_hours = 0.0;
    project.training.include = false;
    project.storage_network.include = false;
    project.inference = InferenceSpec {
        include: true,
        region_id: "world".to_string(),
        mode: InferenceMode::SelfHosted,
        infra_id: "cloud".to_string(),
        hardware_id: "gpu_t4".to_string(),
        device_count: 1,
        always_on: true,
        latency_ms: 100.0,
        api_model_id: "generic_api".to_string(),
        requests_per_day: 0,
        tokens_per_request: 0,
    };
    project
}

#[test]
fn test_always_on_t4_scenario_lands_in_grade_c() {
    // 70 W card, PUE 1.2, world grid, one year, four-year lifespan.
    let assessment = assess(
        &self_hosted_baseline(),
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap();
    let fp = &assessment.footprint;
    assert!((fp.total_energy_kwh - 735.84).abs() < 1e-9);
    assert!((fp.co2_inference_usage_kg - 349.524).abs() < 1e-3);
    assert!((fp.co2_inference_embodied_kg - 50.0).abs() < 1e-9);
    assert!((fp.total_co2_kg - 399.524).abs() < 1e-3);
    assert_eq!(assessment.score.grade, Grade::C);
}

#[test]
fn test_hosted_api_scenario_totals_5840_kg() {
    // 1000 requests/day, 1000 tokens each, 8 g per 1k tokens, two years.
    let mut tables = ReferenceTables::builtin();
    tables.api_models.insert(
        "compact".to_string(),
        ApiModelFactor::new("Compact", 8.0),
    );
    let mut project = self_hosted_baseline();
    project.duration_years = 2.0;
    project.inference.mode = InferenceMode::HostedApi;
    project.inference.api_model_id = "compact".to_string();
    project.inference.requests_per_day = 1000;
    project.inference.tokens_per_request = 1000;

    let fp = compute_footprint(&project, &Assumptions::default(), &tables).unwrap();
    assert!((fp.co2_inference_usage_kg - 5840.0).abs() < 1e-6);
    assert!((fp.total_co2_kg - 5840.0).abs() < 1e-6);
    assert_eq!(fp.total_energy_kwh, 0.0);
    assert_eq!(fp.total_water_m3, 0.0);
}

#[test]
fn test_compute_footprint_is_bit_identical_across_calls() {
    let project = ProjectDescription::default();
    let assumptions = Assumptions::default();
    let tables = ReferenceTables::builtin();
    let first = compute_footprint(&project, &assumptions, &tables).unwrap();
    for _ in 0..5 {
        assert_eq!(
            compute_footprint(&project, &assumptions, &tables).unwrap(),
            first
        );
    }
}

#[test]
fn test_grade_boundaries_are_exact() {
    let cases = [
        (50.0, Grade::A),
        (50.000001, Grade::B),
        (1000.0, Grade::C),
        (1000.000001, Grade::D),
    ];
    for (co2, expected) in cases {
        let footprint = FootprintResult {
            total_co2_kg: co2,
            ..FootprintResult::ZERO
        };
        assert_eq!(
            calculate_score(&footprint).grade,
            expected,
            "total of {co2} kg"
        );
    }
}

#[test]
fn test_score_range_and_monotonicity() {
    let mut last = 100u8;
    for exponent in 0..8 {
        let footprint = FootprintResult {
            total_co2_kg: 10f64.powi(exponent),
            total_water_m3: 2.0,
            ..FootprintResult::ZERO
        };
        let score = calculate_score(&footprint);
        assert!(score.score_100 <= 100);
        assert!(score.score_100 <= last);
        last = score.score_100;
    }
}

#[test]
fn test_zero_levers_keep_baseline() {
    let footprint = compute_footprint(
        &self_hosted_baseline(),
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap();
    let outcome = simulate_what_if(&footprint, &WhatIfLevers::default()).unwrap();
    assert_eq!(outcome.optimized_co2_kg, outcome.baseline_co2_kg);
    assert_eq!(outcome.relative_reduction_pct, 0.0);
}

#[test]
fn test_maxed_levers_never_go_negative() {
    let footprint = compute_footprint(
        &self_hosted_baseline(),
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap();
    let levers = WhatIfLevers {
        token_reduction_pct: 100.0,
        traffic_reduction_pct: 100.0,
        region_optimization_pct: 100.0,
        pue_improvement_pct: 100.0,
        frequency_reduction_pct: 100.0,
    };
    let outcome = simulate_what_if(&footprint, &levers).unwrap();
    assert!(outcome.optimized_co2_kg >= 0.0);
    assert!(outcome.relative_reduction_pct <= 100.0);
}

#[test]
fn test_aggregate_matches_field_sums_and_rescoring() {
    let assumptions = Assumptions::default();
    let tables = ReferenceTables::builtin();
    let a = compute_footprint(&self_hosted_baseline(), &assumptions, &tables).unwrap();
    let b = compute_footprint(&ProjectDescription::default(), &assumptions, &tables).unwrap();

    let merged = aggregate_footprints(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(merged.total_co2_kg, a.total_co2_kg + b.total_co2_kg);
    assert_eq!(merged.total_energy_kwh, a.total_energy_kwh + b.total_energy_kwh);
    assert_eq!(merged.total_water_m3, a.total_water_m3 + b.total_water_m3);
    assert_eq!(merged.annual_co2_kg, a.annual_co2_kg + b.annual_co2_kg);

    let rescored = calculate_score(&merged);
    assert!(rescored.score_100 <= calculate_score(&a).score_100);
}

#[test]
fn test_aggregate_rejects_single_footprint() {
    let fp = compute_footprint(
        &self_hosted_baseline(),
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap();
    let err = aggregate_footprints(&[fp]).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientFootprints(1)));
}

#[test]
fn test_blank_name_is_replaced_not_rejected() {
    let mut project = self_hosted_baseline();
    project.name = "   ".to_string();
    let project = project.validated().unwrap();
    assert_eq!(project.name, "Unnamed Project");
    assert!(assess(
        &project,
        &Assumptions::default(),
        &ReferenceTables::builtin()
    )
    .is_ok());
}

#[test]
fn test_negative_numeric_field_lists_the_offender() {
    let mut project = self_hosted_baseline();
    project.inference.latency_ms = -5.0;
    let err = assess(
        &project,
        &Assumptions::default(),
        &ReferenceTables::builtin(),
    )
    .unwrap_err();
    let EngineError::Validation(validation) = err else {
        panic!("expected a validation error");
    };
    assert!(validation
        .violations
        .iter()
        .any(|v| v.field.contains("latency_ms")));
}
