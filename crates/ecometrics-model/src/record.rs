// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Flat saved-project record
//!
//! One row per save: every leaf field of the project description flattened
//! with a section prefix, plus the headline results. This is the shape the
//! project history file stores and downstream spreadsheets consume.

use crate::project::{
    DevelopmentSpec, Environment, InferenceMode, InferenceSpec, ProjectArchetype,
    ProjectDescription, RunFrequency, StorageNetworkSpec, TrainingSpec,
};
use crate::{FootprintResult, Grade, ScoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure to rebuild a record from its tabular fields
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {expected} columns, got {got}")]
    ColumnCount { expected: usize, got: usize },
    #[error("column `{column}`: {message}")]
    BadValue {
        column: &'static str,
        message: String,
    },
}

/// One flattened row of project inputs and headline results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub owner: String,
    pub archetype: ProjectArchetype,
    pub environment: Environment,
    pub duration_years: f64,
    pub created_at: DateTime<Utc>,

    pub dev_infra: String,
    pub dev_hardware: String,
    pub dev_hours: f64,

    pub training_include: bool,
    pub training_region: String,
    pub training_infra: String,
    pub training_hardware: String,
    pub training_device_count: u32,
    pub training_run_hours: f64,
    pub training_frequency: RunFrequency,

    pub inference_include: bool,
    pub inference_region: String,
    pub inference_mode: InferenceMode,
    pub inference_infra: String,
    pub inference_hardware: String,
    pub inference_device_count: u32,
    pub inference_always_on: bool,
    pub inference_latency_ms: f64,
    pub inference_api_model: String,
    pub inference_requests_per_day: u64,
    pub inference_tokens_per_request: u64,

    pub storage_include: bool,
    pub storage_dataset_gb: f64,
    pub storage_transfer_gb_per_day: f64,

    pub total_co2_kg: f64,
    pub total_water_m3: f64,
    pub score_grade: Grade,
    pub score_100: u8,
    /// When the record was saved (distinct from the project's `created_at`)
    pub timestamp: DateTime<Utc>,
}

impl ProjectRecord {
    /// Column names, in row order.
    pub const COLUMNS: [&'static str; 35] = [
        "name",
        "owner",
        "archetype",
        "environment",
        "duration_years",
        "created_at",
        "dev_infra",
        "dev_hardware",
        "dev_hours",
        "training_include",
        "training_region",
        "training_infra",
        "training_hardware",
        "training_device_count",
        "training_run_hours",
        "training_frequency",
        "inference_include",
        "inference_region",
        "inference_mode",
        "inference_infra",
        "inference_hardware",
        "inference_device_count",
        "inference_always_on",
        "inference_latency_ms",
        "inference_api_model",
        "inference_requests_per_day",
        "inference_tokens_per_request",
        "storage_include",
        "storage_dataset_gb",
        "storage_transfer_gb_per_day",
        "total_co2_kg",
        "total_water_m3",
        "score_grade",
        "score_100",
        "timestamp",
    ];

    /// Flatten a computed project into one saved row, stamped now.
    pub fn new(
        project: &ProjectDescription,
        footprint: &FootprintResult,
        score: &ScoreResult,
    ) -> Self {
        Self {
            name: project.name.clone(),
            owner: project.owner.clone(),
            archetype: project.archetype,
            environment: project.environment,
            duration_years: project.duration_years,
            created_at: project.created_at,
            dev_infra: project.development.infra_id.clone(),
            dev_hardware: project.development.hardware_id.clone(),
            dev_hours: project.development.dev_hours,
            training_include: project.training.include,
            training_region: project.training.region_id.clone(),
            training_infra: project.training.infra_id.clone(),
            training_hardware: project.training.hardware_id.clone(),
            training_device_count: project.training.device_count,
            training_run_hours: project.training.duration_run_hours,
            training_frequency: project.training.frequency,
            inference_include: project.inference.include,
            inference_region: project.inference.region_id.clone(),
            inference_mode: project.inference.mode,
            inference_infra: project.inference.infra_id.clone(),
            inference_hardware: project.inference.hardware_id.clone(),
            inference_device_count: project.inference.device_count,
            inference_always_on: project.inference.always_on,
            inference_latency_ms: project.inference.latency_ms,
            inference_api_model: project.inference.api_model_id.clone(),
            inference_requests_per_day: project.inference.requests_per_day,
            inference_tokens_per_request: project.inference.tokens_per_request,
            storage_include: project.storage_network.include,
            storage_dataset_gb: project.storage_network.dataset_gb,
            storage_transfer_gb_per_day: project.storage_network.transfer_gb_per_day,
            total_co2_kg: footprint.total_co2_kg,
            total_water_m3: footprint.total_water_m3,
            score_grade: score.grade,
            score_100: score.score_100,
            timestamp: Utc::now(),
        }
    }

    /// Override the save timestamp (deterministic tests)
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Rebuild the project description this row was flattened from.
    pub fn to_project(&self) -> ProjectDescription {
        ProjectDescription {
            name: self.name.clone(),
            owner: self.owner.clone(),
            created_at: self.created_at,
            archetype: self.archetype,
            environment: self.environment,
            duration_years: self.duration_years,
            development: DevelopmentSpec {
                infra_id: self.dev_infra.clone(),
                hardware_id: self.dev_hardware.clone(),
                dev_hours: self.dev_hours,
            },
            training: TrainingSpec {
                include: self.training_include,
                region_id: self.training_region.clone(),
                infra_id: self.training_infra.clone(),
                hardware_id: self.training_hardware.clone(),
                device_count: self.training_device_count,
                duration_run_hours: self.training_run_hours,
                frequency: self.training_frequency,
            },
            inference: InferenceSpec {
                include: self.inference_include,
                region_id: self.inference_region.clone(),
                mode: self.inference_mode,
                infra_id: self.inference_infra.clone(),
                hardware_id: self.inference_hardware.clone(),
                device_count: self.inference_device_count,
                always_on: self.inference_always_on,
                latency_ms: self.inference_latency_ms,
                api_model_id: self.inference_api_model.clone(),
                requests_per_day: self.inference_requests_per_day,
                tokens_per_request: self.inference_tokens_per_request,
            },
            storage_network: StorageNetworkSpec {
                include: self.storage_include,
                dataset_gb: self.storage_dataset_gb,
                transfer_gb_per_day: self.storage_transfer_gb_per_day,
            },
        }
    }

    /// Row values as strings, in [`Self::COLUMNS`] order.
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.owner.clone(),
            self.archetype.as_token().to_string(),
            self.environment.as_token().to_string(),
            self.duration_years.to_string(),
            self.created_at.to_rfc3339(),
            self.dev_infra.clone(),
            self.dev_hardware.clone(),
            self.dev_hours.to_string(),
            self.training_include.to_string(),
            self.training_region.clone(),
            self.training_infra.clone(),
            self.training_hardware.clone(),
            self.training_device_count.to_string(),
            self.training_run_hours.to_string(),
            self.training_frequency.as_token().to_string(),
            self.inference_include.to_string(),
            self.inference_region.clone(),
            self.inference_mode.as_token().to_string(),
            self.inference_infra.clone(),
            self.inference_hardware.clone(),
            self.inference_device_count.to_string(),
            self.inference_always_on.to_string(),
            self.inference_latency_ms.to_string(),
            self.inference_api_model.clone(),
            self.inference_requests_per_day.to_string(),
            self.inference_tokens_per_request.to_string(),
            self.storage_include.to_string(),
            self.storage_dataset_gb.to_string(),
            self.storage_transfer_gb_per_day.to_string(),
            self.total_co2_kg.to_string(),
            self.total_water_m3.to_string(),
            self.score_grade.as_str().to_string(),
            self.score_100.to_string(),
            self.timestamp.to_rfc3339(),
        ]
    }

    /// Rebuild a record from row values in [`Self::COLUMNS`] order.
    pub fn from_fields(fields: &[String]) -> Result<Self, RecordError> {
        if fields.len() != Self::COLUMNS.len() {
            return Err(RecordError::ColumnCount {
                expected: Self::COLUMNS.len(),
                got: fields.len(),
            });
        }

        Ok(Self {
            name: fields[0].clone(),
            owner: fields[1].clone(),
            archetype: parse_token(&fields[2], "archetype", ProjectArchetype::from_token)?,
            environment: parse_token(&fields[3], "environment", Environment::from_token)?,
            duration_years: parse_value(&fields[4], "duration_years")?,
            created_at: parse_datetime(&fields[5], "created_at")?,
            dev_infra: fields[6].clone(),
            dev_hardware: fields[7].clone(),
            dev_hours: parse_value(&fields[8], "dev_hours")?,
            training_include: parse_value(&fields[9], "training_include")?,
            training_region: fields[10].clone(),
            training_infra: fields[11].clone(),
            training_hardware: fields[12].clone(),
            training_device_count: parse_value(&fields[13], "training_device_count")?,
            training_run_hours: parse_value(&fields[14], "training_run_hours")?,
            training_frequency: parse_token(
                &fields[15],
                "training_frequency",
                RunFrequency::from_token,
            )?,
            inference_include: parse_value(&fields[16], "inference_include")?,
            inference_region: fields[17].clone(),
            inference_mode: parse_token(&fields[18], "inference_mode", InferenceMode::from_token)?,
            inference_infra: fields[19].clone(),
            inference_hardware: fields[20].clone(),
            inference_device_count: parse_value(&fields[21], "inference_device_count")?,
            inference_always_on: parse_value(&fields[22], "inference_always_on")?,
            inference_latency_ms: parse_value(&fields[23], "inference_latency_ms")?,
            inference_api_model: fields[24].clone(),
            inference_requests_per_day: parse_value(&fields[25], "inference_requests_per_day")?,
            inference_tokens_per_request: parse_value(
                &fields[26],
                "inference_tokens_per_request",
            )?,
            storage_include: parse_value(&fields[27], "storage_include")?,
            storage_dataset_gb: parse_value(&fields[28], "storage_dataset_gb")?,
            storage_transfer_gb_per_day: parse_value(&fields[29], "storage_transfer_gb_per_day")?,
            total_co2_kg: parse_value(&fields[30], "total_co2_kg")?,
            total_water_m3: parse_value(&fields[31], "total_water_m3")?,
            score_grade: parse_token(&fields[32], "score_grade", Grade::from_token)?,
            score_100: parse_value(&fields[33], "score_100")?,
            timestamp: parse_datetime(&fields[34], "timestamp")?,
        })
    }
}

fn parse_value<T>(value: &str, column: &'static str) -> Result<T, RecordError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e: T::Err| RecordError::BadValue {
        column,
        message: e.to_string(),
    })
}

fn parse_token<T>(
    value: &str,
    column: &'static str,
    from_token: impl Fn(&str) -> Option<T>,
) -> Result<T, RecordError> {
    from_token(value).ok_or_else(|| RecordError::BadValue {
        column,
        message: format!("unknown token `{value}`"),
    })
}

fn parse_datetime(value: &str, column: &'static str) -> Result<DateTime<Utc>, RecordError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RecordError::BadValue {
            column,
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ProjectRecord {
        let project = ProjectDescription::new("Churn Model", "Data Team")
            .validated()
            .unwrap();
        let footprint = FootprintResult {
            total_co2_kg: 399.5,
            total_water_m3: 0.37,
            ..FootprintResult::ZERO
        };
        let score = ScoreResult::new(60, Grade::C);
        ProjectRecord::new(&project, &footprint, &score)
    }

    #[test]
    fn test_fields_round_trip() {
        let record = sample_record();
        let fields = record.to_fields();
        assert_eq!(fields.len(), ProjectRecord::COLUMNS.len());
        let rebuilt = ProjectRecord::from_fields(&fields).unwrap();
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_record_rebuilds_project() {
        let project = ProjectDescription::new("Churn Model", "Data Team")
            .validated()
            .unwrap();
        let footprint = FootprintResult::ZERO;
        let score = ScoreResult::new(100, Grade::A);
        let record = ProjectRecord::new(&project, &footprint, &score);
        assert_eq!(record.to_project(), project);
    }

    #[test]
    fn test_column_count_mismatch_rejected() {
        let fields = vec![String::from("only"), String::from("two")];
        assert!(matches!(
            ProjectRecord::from_fields(&fields),
            Err(RecordError::ColumnCount { got: 2, .. })
        ));
    }

    #[test]
    fn test_bad_token_names_column() {
        let mut fields = sample_record().to_fields();
        fields[18] = "telepathy".to_string();
        let err = ProjectRecord::from_fields(&fields).unwrap_err();
        assert!(err.to_string().contains("inference_mode"));
    }
}
