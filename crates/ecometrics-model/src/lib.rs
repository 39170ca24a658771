// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! # EcoMetrics Model
//!
//! Core data types for AI project footprint estimation: the project
//! description a caller assembles, the environmental assumptions the
//! calculation runs under, and the footprint/score results it produces.
//!
//! A [`ProjectDescription`] is an immutable snapshot of one simulation
//! request. Callers construct it, run it through
//! [`ProjectDescription::validated`] exactly once, and pass it to the engine
//! by reference; the engine never mutates it. Every recomputation takes
//! fresh inputs.
//!
//! ## Usage
//!
//! ```rust
//! use ecometrics_model::ProjectDescription;
//!
//! let mut project = ProjectDescription::default();
//! project.name = "  ".to_string(); // blank names are recovered, not rejected
//! let project = project.validated().unwrap();
//! assert_eq!(project.name, "Unnamed Project");
//! ```

pub mod assumptions;
pub mod footprint;
pub mod project;
pub mod record;
pub mod score;

pub use assumptions::Assumptions;
pub use footprint::FootprintResult;
pub use project::{
    DevelopmentSpec, Environment, InferenceMode, InferenceSpec, ProjectArchetype,
    ProjectDescription, RunFrequency, StorageNetworkSpec, TrainingSpec, DEFAULT_PROJECT_NAME,
};
pub use record::{ProjectRecord, RecordError};
pub use score::{Grade, ScoreResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rejected input field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path of the offending field, e.g. `training.device_count`.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structured validation failure listing every offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("validation failed: {}", self.describe())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    fn describe(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{} ({})", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
