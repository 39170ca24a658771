// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell

//! # EcoMetrics Store
//!
//! Flat tabular project history. Every save appends one CSV row to a
//! single file, so the history is greppable and opens in any spreadsheet.
//! Rows are full snapshots: the project inputs, the computed totals, and
//! the grade all travel together, and a saved project can be rebuilt into
//! a [`ProjectDescription`](ecometrics_model::ProjectDescription) for
//! recomputation against newer reference tables.

mod csv;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use ecometrics_model::{ProjectRecord, RecordError};

/// Errors from reading or writing the history file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HOME is not set; cannot locate the default store")]
    NoHome,

    #[error("unrecognized header in {path}: not an ecometrics history file")]
    BadHeader { path: PathBuf },

    #[error("malformed record at line {line}")]
    MalformedRow {
        line: usize,
        #[source]
        source: RecordError,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Append-only CSV history of saved projects.
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Open a store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the per-user default store (`~/.ecometrics/projects.csv`).
    pub fn default_location() -> Result<Self> {
        let home = std::env::var("HOME").map_err(|_| StoreError::NoHome)?;
        let dir = PathBuf::from(home).join(".ecometrics");
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join("projects.csv")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn header() -> String {
        ProjectRecord::COLUMNS.join(",")
    }

    /// Append one record, writing the header first on a fresh file.
    pub fn append(&self, record: &ProjectRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let fresh = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if fresh {
            writeln!(file, "{}", Self::header())?;
        }
        writeln!(file, "{}", csv::encode_row(&record.to_fields()))?;
        debug!(path = %self.path.display(), name = %record.name, "Appended project record");
        Ok(())
    }

    /// Load the full history. A store that does not exist yet is empty.
    pub fn load_all(&self) -> Result<Vec<ProjectRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        let mut lines = content.lines().enumerate();
        match lines.next() {
            Some((_, header)) if header == Self::header() => {}
            Some(_) => {
                return Err(StoreError::BadHeader {
                    path: self.path.clone(),
                })
            }
            None => return Ok(Vec::new()),
        }
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = csv::parse_row(line);
            let record =
                ProjectRecord::from_fields(&fields).map_err(|source| StoreError::MalformedRow {
                    line: index + 1,
                    source,
                })?;
            records.push(record);
        }
        debug!(path = %self.path.display(), count = records.len(), "Loaded project history");
        Ok(records)
    }

    /// Most recent save for a given project name, if any.
    pub fn latest_by_name(&self, name: &str) -> Result<Option<ProjectRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.name == name)
            .max_by_key(|r| r.timestamp))
    }

    /// Distinct project names in first-saved order.
    pub fn project_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = Vec::new();
        for record in self.load_all()? {
            if !names.contains(&record.name) {
                names.push(record.name);
            }
        }
        Ok(names)
    }
}
