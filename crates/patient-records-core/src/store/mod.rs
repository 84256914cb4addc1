//! In-memory record store.

mod config;
mod validation;

pub use config::*;
pub use validation::*;

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{self, PatientRecord, PatientUpdate, RecordStats};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Patient ID does not exist: {0}")]
    NotFound(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owns patient records keyed by id, in insertion order.
///
/// Every record inserted through [`RecordStore::add`] or
/// [`RecordStore::import_json`] has passed [`validate`].
#[derive(Debug, Default)]
pub struct RecordStore {
    config: StoreConfig,
    records: Vec<PatientRecord>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Validate and insert a record. An existing record with the same id is
    /// replaced in place.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        weight: f64,
        height: f64,
    ) -> StoreResult<()> {
        let record = PatientRecord::new(id.into(), name.into(), age, weight, height);
        self.insert(record)
    }

    fn insert(&mut self, record: PatientRecord) -> StoreResult<()> {
        if let Err(e) = validate_record(&record) {
            tracing::warn!("Rejected record {:?}: {}", record.id, e);
            return Err(e.into());
        }
        self.insert_unchecked(record);
        Ok(())
    }

    fn insert_unchecked(&mut self, record: PatientRecord) {
        match self.index.get(&record.id) {
            Some(&pos) => {
                tracing::debug!("Replacing record {}", record.id);
                self.records[pos] = record;
            }
            None => {
                tracing::debug!("Adding record {}", record.id);
                self.index.insert(record.id.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Apply a partial update to an existing record.
    ///
    /// Under [`UpdatePolicy::Unchecked`] supplied values are stored verbatim.
    pub fn update(&mut self, id: &str, update: &PatientUpdate) -> StoreResult<()> {
        let pos = self.position(id)?;

        if self.config.update_policy == UpdatePolicy::Validated {
            if let Err(e) = validate_update(update) {
                tracing::warn!("Rejected update for {:?}: {}", id, e);
                return Err(e.into());
            }
        }

        if self.records[pos].apply(update) {
            tracing::debug!("Updated record {}", id);
        }
        Ok(())
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> StoreResult<&PatientRecord> {
        let pos = self.position(id)?;
        Ok(&self.records[pos])
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.index.get(id).copied().ok_or_else(|| {
            tracing::debug!("Record not found: {:?}", id);
            StoreError::NotFound(id.to_string())
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.iter()
    }

    /// Mean age across all records, `None` when empty.
    pub fn average_age(&self) -> Option<f64> {
        models::average_age(&self.records)
    }

    /// Mean of per-record BMI, `None` when empty.
    pub fn average_bmi(&self) -> Option<f64> {
        models::average_bmi(&self.records)
    }

    pub fn stats(&self) -> RecordStats {
        RecordStats::from_records(&self.records)
    }

    /// Export all records as a JSON array.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Import records from a JSON array produced by [`RecordStore::to_json`].
    ///
    /// All records are validated before any is inserted. Returns the number
    /// of distinct ids imported; a repeated id keeps its last copy.
    pub fn import_json(&mut self, json: &str) -> StoreResult<usize> {
        let imported: Vec<PatientRecord> = serde_json::from_str(json)?;
        for record in &imported {
            if let Err(e) = validate_record(record) {
                tracing::warn!("Rejected import of {:?}: {}", record.id, e);
                return Err(e.into());
            }
        }

        let count = imported
            .iter()
            .map(|r| r.id.as_str())
            .collect::<HashSet<_>>()
            .len();
        for record in imported {
            self.insert_unchecked(record);
        }
        Ok(count)
    }
}
