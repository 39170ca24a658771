// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Deterministic assessment engine: footprint calculation, eco-scoring,
//! what-if simulation, portfolio aggregation, and advice.
//!
//! Every function here is a pure computation over a [`ProjectDescription`],
//! an [`Assumptions`] set, and a [`ReferenceTables`] snapshot. The same
//! inputs always produce the same outputs; nothing in this crate touches
//! the clock, the filesystem, or a random source.
//!
//! ```
//! use ecometrics_engine::assess;
//! use ecometrics_model::{Assumptions, ProjectDescription};
//! use ecometrics_refdata::ReferenceTables;
//!
//! let project = ProjectDescription::new("Churn Model", "Data Team");
//! let assessment = assess(&project, &Assumptions::default(), &ReferenceTables::builtin())?;
//! assert!(assessment.footprint.total_co2_kg > 0.0);
//! assert!(assessment.score.score_100 <= 100);
//! # Ok::<(), ecometrics_engine::EngineError>(())
//! ```

pub mod advisor;
pub mod aggregate;
pub mod calculator;
pub mod scenario;
pub mod scoring;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ecometrics_model::{
    Assumptions, FootprintResult, ProjectDescription, ScoreResult, ValidationError,
};
use ecometrics_refdata::ReferenceTables;

pub use aggregate::aggregate_footprints;
pub use calculator::compute_footprint;
pub use scenario::{simulate_what_if, WhatIfLevers, WhatIfOutcome};
pub use scoring::calculate_score;

/// Errors produced by the assessment engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The project or assumptions failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Aggregation needs at least two footprints.
    #[error("aggregation needs at least two footprints, got {0}")]
    InsufficientFootprints(usize),

    /// A what-if lever was outside the 0..=100 range.
    #[error("lever '{lever}' must be between 0 and 100, got {value}")]
    LeverOutOfRange { lever: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Full assessment of a single project: footprint, score, and advice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAssessment {
    pub footprint: FootprintResult,
    pub score: ScoreResult,
    pub recommendations: Vec<String>,
}

/// Run the whole pipeline for one project.
pub fn assess(
    project: &ProjectDescription,
    assumptions: &Assumptions,
    tables: &ReferenceTables,
) -> Result<ProjectAssessment> {
    let footprint = calculator::compute_footprint(project, assumptions, tables)?;
    let score = scoring::calculate_score(&footprint);
    let recommendations = advisor::recommend(project, &footprint, tables);
    Ok(ProjectAssessment {
        footprint,
        score,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_defaults_produce_consistent_bundle() {
        let project = ProjectDescription::default();
        let assessment = assess(
            &project,
            &Assumptions::default(),
            &ReferenceTables::builtin(),
        )
        .unwrap();
        assert!(assessment.footprint.total_co2_kg > 0.0);
        assert_eq!(
            assessment.score,
            calculate_score(&assessment.footprint),
            "score must be derived from the reported footprint"
        );
    }

    #[test]
    fn test_assess_rejects_invalid_project() {
        let mut project = ProjectDescription::default();
        project.duration_years = 0.0;
        let err = assess(
            &project,
            &Assumptions::default(),
            &ReferenceTables::builtin(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}
