// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Project description: the immutable snapshot of one simulation request

use crate::{FieldViolation, Result, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted for a blank project name during validation.
pub const DEFAULT_PROJECT_NAME: &str = "Unnamed Project";

/// Declared kind of AI project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectArchetype {
    /// Feature-engineered models (trees, linear models)
    ClassicMl,
    /// Neural networks trained in-house
    DeepLearning,
    /// Generative models, usually consumed through a provider API
    GenAi,
}

impl ProjectArchetype {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectArchetype::ClassicMl => "Classic ML",
            ProjectArchetype::DeepLearning => "Deep Learning",
            ProjectArchetype::GenAi => "GenAI",
        }
    }

    /// Wire token, matching the serialized form.
    pub fn as_token(&self) -> &'static str {
        match self {
            ProjectArchetype::ClassicMl => "classic_ml",
            ProjectArchetype::DeepLearning => "deep_learning",
            ProjectArchetype::GenAi => "gen_ai",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "classic_ml" => Some(ProjectArchetype::ClassicMl),
            "deep_learning" => Some(ProjectArchetype::DeepLearning),
            "gen_ai" => Some(ProjectArchetype::GenAi),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deployment environment the estimate is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Poc,
    Production,
}

impl Environment {
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Poc => "PoC",
            Environment::Production => "Production",
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Environment::Poc => "poc",
            Environment::Production => "production",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "poc" => Some(Environment::Poc),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How often training runs over the project's life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunFrequency {
    OneOff,
    Weekly,
    Monthly,
    Daily,
}

impl RunFrequency {
    /// Number of training runs over a project duration in years.
    ///
    /// One-off means exactly one run regardless of duration; the periodic
    /// frequencies scale linearly, fractional durations included.
    pub fn runs_over(&self, years: f64) -> f64 {
        match self {
            RunFrequency::OneOff => 1.0,
            RunFrequency::Weekly => 52.0 * years,
            RunFrequency::Monthly => 12.0 * years,
            RunFrequency::Daily => 365.0 * years,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunFrequency::OneOff => "One-off",
            RunFrequency::Weekly => "Weekly",
            RunFrequency::Monthly => "Monthly",
            RunFrequency::Daily => "Daily",
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            RunFrequency::OneOff => "one_off",
            RunFrequency::Weekly => "weekly",
            RunFrequency::Monthly => "monthly",
            RunFrequency::Daily => "daily",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "one_off" => Some(RunFrequency::OneOff),
            "weekly" => Some(RunFrequency::Weekly),
            "monthly" => Some(RunFrequency::Monthly),
            "daily" => Some(RunFrequency::Daily),
            _ => None,
        }
    }
}

impl fmt::Display for RunFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How inference is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceMode {
    /// Token-billed third-party provider; no visibility into its hardware
    HostedApi,
    /// Owned or rented hardware, modeled from power draw and utilization
    SelfHosted,
}

impl InferenceMode {
    pub fn label(&self) -> &'static str {
        match self {
            InferenceMode::HostedApi => "Hosted API",
            InferenceMode::SelfHosted => "Self-hosted",
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            InferenceMode::HostedApi => "hosted_api",
            InferenceMode::SelfHosted => "self_hosted",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "hosted_api" => Some(InferenceMode::HostedApi),
            "self_hosted" => Some(InferenceMode::SelfHosted),
            _ => None,
        }
    }
}

impl fmt::Display for InferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Development phase inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentSpec {
    /// Infrastructure profile id (reference table key)
    pub infra_id: String,
    /// Hardware id (reference table key)
    pub hardware_id: String,
    /// Hours of development effort on that hardware
    pub dev_hours: f64,
}

impl Default for DevelopmentSpec {
    fn default() -> Self {
        Self {
            infra_id: "local".to_string(),
            hardware_id: "laptop_std".to_string(),
            dev_hours: 50.0,
        }
    }
}

/// Training phase inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSpec {
    pub include: bool,
    /// Region id (reference table key)
    pub region_id: String,
    pub infra_id: String,
    pub hardware_id: String,
    pub device_count: u32,
    /// Duration of a single training run, in hours
    pub duration_run_hours: f64,
    pub frequency: RunFrequency,
}

impl Default for TrainingSpec {
    fn default() -> Self {
        Self {
            include: true,
            region_id: "eu_avg".to_string(),
            infra_id: "cloud".to_string(),
            hardware_id: "gpu_a100".to_string(),
            device_count: 8,
            duration_run_hours: 10.0,
            frequency: RunFrequency::OneOff,
        }
    }
}

/// Inference phase inputs
///
/// Carries the fields for both modes so a description round-trips through
/// serialization unchanged; the calculator reads only the fields of the
/// selected mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceSpec {
    pub include: bool,
    pub region_id: String,
    pub mode: InferenceMode,
    // Self-hosted fields
    pub infra_id: String,
    pub hardware_id: String,
    pub device_count: u32,
    /// Powered 24/7 regardless of traffic
    pub always_on: bool,
    /// Average latency of one request, in milliseconds
    pub latency_ms: f64,
    // Hosted-API fields
    pub api_model_id: String,
    pub requests_per_day: u64,
    pub tokens_per_request: u64,
}

impl Default for InferenceSpec {
    fn default() -> Self {
        Self {
            include: true,
            region_id: "eu_avg".to_string(),
            mode: InferenceMode::HostedApi,
            infra_id: "cloud".to_string(),
            hardware_id: "gpu_t4".to_string(),
            device_count: 1,
            always_on: true,
            latency_ms: 100.0,
            api_model_id: "generic_api".to_string(),
            requests_per_day: 1500,
            tokens_per_request: 1500,
        }
    }
}

/// Storage and network phase inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageNetworkSpec {
    pub include: bool,
    pub dataset_gb: f64,
    pub transfer_gb_per_day: f64,
}

impl Default for StorageNetworkSpec {
    fn default() -> Self {
        Self {
            include: true,
            dataset_gb: 50.0,
            transfer_gb_per_day: 1.0,
        }
    }
}

/// Immutable snapshot of a single simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub name: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub archetype: ProjectArchetype,
    pub environment: Environment,
    pub duration_years: f64,
    pub development: DevelopmentSpec,
    pub training: TrainingSpec,
    pub inference: InferenceSpec,
    pub storage_network: StorageNetworkSpec,
}

impl Default for ProjectDescription {
    fn default() -> Self {
        Self {
            name: "New AI Project".to_string(),
            owner: "Data Team".to_string(),
            created_at: Utc::now(),
            archetype: ProjectArchetype::GenAi,
            environment: Environment::Production,
            duration_years: 2.0,
            development: DevelopmentSpec::default(),
            training: TrainingSpec::default(),
            inference: InferenceSpec::default(),
            storage_network: StorageNetworkSpec::default(),
        }
    }
}

impl ProjectDescription {
    /// Create a description with the given identity and default phase inputs
    pub fn new(name: &str, owner: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: owner.to_string(),
            ..Self::default()
        }
    }

    pub fn with_duration_years(mut self, years: f64) -> Self {
        self.duration_years = years;
        self
    }

    pub fn with_archetype(mut self, archetype: ProjectArchetype) -> Self {
        self.archetype = archetype;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Normalize and validate the description, consuming it.
    ///
    /// A blank name is recovered silently by substituting
    /// [`DEFAULT_PROJECT_NAME`]; numeric bounds are hard failures collected
    /// into one [`ValidationError`]. Call once after construction.
    pub fn validated(mut self) -> Result<Self> {
        let trimmed = self.name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_PROJECT_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        self.validate()?;
        Ok(self)
    }

    /// Check every numeric bound without mutating anything.
    ///
    /// The engine calls this on entry so a malformed description is rejected
    /// before any arithmetic runs.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if !(self.duration_years > 0.0) {
            violations.push(FieldViolation::new(
                "duration_years",
                "must be greater than 0",
            ));
        }
        if !(self.development.dev_hours >= 0.0) {
            violations.push(FieldViolation::new("development.dev_hours", "must be >= 0"));
        }
        if self.training.device_count < 1 {
            violations.push(FieldViolation::new("training.device_count", "must be >= 1"));
        }
        if !(self.training.duration_run_hours >= 0.0) {
            violations.push(FieldViolation::new(
                "training.duration_run_hours",
                "must be >= 0",
            ));
        }
        if self.inference.device_count < 1 {
            violations.push(FieldViolation::new(
                "inference.device_count",
                "must be >= 1",
            ));
        }
        if !(self.inference.latency_ms >= 0.0) {
            violations.push(FieldViolation::new("inference.latency_ms", "must be >= 0"));
        }
        if !(self.storage_network.dataset_gb >= 0.0) {
            violations.push(FieldViolation::new(
                "storage_network.dataset_gb",
                "must be >= 0",
            ));
        }
        if !(self.storage_network.transfer_gb_per_day >= 0.0) {
            violations.push(FieldViolation::new(
                "storage_network.transfer_gb_per_day",
                "must be >= 0",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}
