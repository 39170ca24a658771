// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! # EcoMetrics Reference Data
//!
//! Read-only catalogs the engine looks facts up in: hardware power draw and
//! embodied emissions, regional grid carbon intensity, infrastructure PUE
//! profiles, and hosted-API emission factors.
//!
//! The engine never fails on an unknown id: every lookup falls back to an
//! explicit default entry, the same way an analyst would substitute a world
//! average when a row is missing. Tables ship with curated built-in data and
//! can be overridden per-file from a directory of JSON files; the resulting
//! [`ReferenceTables`] value is passed into the engine explicitly, never held
//! as process-wide state.

pub mod loader;
pub mod tables;

pub use tables::{
    ApiModelFactor, DeviceClass, Fallbacks, HardwareSpec, InfraProfile, ReferenceTables,
    RegionFactor,
};

use thiserror::Error;

/// Errors from loading reference tables off disk
#[derive(Error, Debug)]
pub enum RefDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RefDataError>;
