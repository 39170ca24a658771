// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! Loading catalogs from a directory of JSON files

use crate::tables::{ApiModelFactor, HardwareSpec, InfraProfile, ReferenceTables, RegionFactor};
use crate::{RefDataError, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

/// File names looked for inside a tables directory.
pub const HARDWARE_FILE: &str = "hardware.json";
pub const REGIONS_FILE: &str = "regions.json";
pub const INFRA_FILE: &str = "infra.json";
pub const API_MODELS_FILE: &str = "api_models.json";

impl ReferenceTables {
    /// Load catalogs from a directory, starting from the built-ins.
    ///
    /// Each file is optional; a missing file keeps the built-in catalog for
    /// that table. A file that exists but does not parse is an error.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut tables = Self::builtin();

        if let Some(map) = read_table::<HardwareSpec>(&dir.join(HARDWARE_FILE))? {
            tables.hardware = map;
        }
        if let Some(map) = read_table::<RegionFactor>(&dir.join(REGIONS_FILE))? {
            tables.regions = map;
        }
        if let Some(map) = read_table::<InfraProfile>(&dir.join(INFRA_FILE))? {
            tables.infra = map;
        }
        if let Some(map) = read_table::<ApiModelFactor>(&dir.join(API_MODELS_FILE))? {
            tables.api_models = map;
        }

        Ok(tables)
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Option<BTreeMap<String, T>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| RefDataError::Parse {
            file: path.display().to_string(),
            source: e,
        })
}
