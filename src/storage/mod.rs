//! Analysis result persistence
//!
//! Persistence is decoupled from scoring: a store failure is reported as a
//! warning next to a successful score and never discards the score.

use crate::analysis::types::{CandidateProfile, FinalFitResult, JobRequirement};
use crate::error::{Result, JobFitError};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

/// One persisted analysis: the inputs it was computed from and the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Utc>,
    pub requirement: JobRequirement,
    pub candidate: CandidateProfile,
    pub result: FinalFitResult,
}

impl AnalysisRecord {
    pub fn new(
        requirement: JobRequirement,
        candidate: CandidateProfile,
        result: FinalFitResult,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            requirement,
            candidate,
            result,
        }
    }
}

pub trait AnalysisStore {
    fn save(&self, record: &AnalysisRecord) -> Result<()>;
}

/// Append-only JSON-lines store, one record per line.
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("jobfit")
            .join("analyses.jsonl")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl AnalysisStore for JsonlStore {
    fn save(&self, record: &AnalysisRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                JobFitError::Persistence(format!(
                    "Failed to create store directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let line = serde_json::to_string(record)?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                JobFitError::Persistence(format!(
                    "Failed to open store '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", line).map_err(|e| {
            JobFitError::Persistence(format!(
                "Failed to write record to '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// Save a record, downgrading failure to a warning. Returns whether the
/// record was persisted.
pub fn save_or_warn<S: AnalysisStore>(store: &S, record: &AnalysisRecord) -> bool {
    match store.save(record) {
        Ok(()) => {
            info!("Analysis record persisted");
            true
        }
        Err(e) => {
            warn!("Could not persist analysis record: {}", e);
            false
        }
    }
}
