//! Patient Records Core Library
//!
//! In-memory store of validated patient records with average age and
//! average BMI statistics.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, PatientUpdate, RecordStats)
//! - [`store`]: Record store, field validation and configuration
//!
//! The crate root exports a thread-safe [`PatientRecordsCore`] object over FFI.
//! Every call holds the store lock for its whole duration.

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{PatientRecord, PatientUpdate, RecordStats};
pub use store::{
    validate, RecordStore, StoreConfig, StoreError, StoreResult, UpdatePolicy, ValidationError,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PatientRecordsError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for PatientRecordsError {
    fn from(e: ValidationError) -> Self {
        PatientRecordsError::Validation {
            field: e.field().to_string(),
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for PatientRecordsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(v) => v.into(),
            StoreError::NotFound(id) => PatientRecordsError::NotFound(id),
            StoreError::Json(j) => PatientRecordsError::Serialization(j.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for PatientRecordsError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PatientRecordsError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an empty record store with unchecked partial updates.
#[uniffi::export]
pub fn new_record_store() -> Arc<PatientRecordsCore> {
    Arc::new(PatientRecordsCore::from_store(RecordStore::new()))
}

/// Create an empty record store, optionally validating partial updates.
#[uniffi::export]
pub fn new_record_store_with_policy(validate_updates: bool) -> Arc<PatientRecordsCore> {
    let config = if validate_updates {
        StoreConfig::validated()
    } else {
        StoreConfig::default()
    };
    Arc::new(PatientRecordsCore::from_store(RecordStore::with_config(
        config,
    )))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe record store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PatientRecordsCore {
    store: Arc<Mutex<RecordStore>>,
}

impl PatientRecordsCore {
    /// Wrap an existing store.
    pub fn from_store(store: RecordStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[uniffi::export]
impl PatientRecordsCore {
    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Add a record, replacing any record with the same ID.
    pub fn add_record(
        &self,
        id: String,
        name: String,
        age: u32,
        weight: f64,
        height: f64,
    ) -> Result<(), PatientRecordsError> {
        let mut store = self.store.lock()?;
        store.add(id, name, age, weight, height)?;
        Ok(())
    }

    /// Update the supplied fields of an existing record.
    pub fn update_record(
        &self,
        id: String,
        update: FfiPatientUpdate,
    ) -> Result<(), PatientRecordsError> {
        let mut store = self.store.lock()?;
        store.update(&id, &update.into())?;
        Ok(())
    }

    /// Get a record by ID.
    pub fn get_record(&self, id: String) -> Result<FfiPatientRecord, PatientRecordsError> {
        let store = self.store.lock()?;
        let record = store.get(&id)?;
        Ok(record.clone().into())
    }

    /// List all records in insertion order.
    pub fn list_records(&self) -> Result<Vec<FfiPatientRecord>, PatientRecordsError> {
        let store = self.store.lock()?;
        Ok(store.records().cloned().map(|r| r.into()).collect())
    }

    /// Number of stored records.
    pub fn record_count(&self) -> Result<u64, PatientRecordsError> {
        let store = self.store.lock()?;
        Ok(store.len() as u64)
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Mean age, or none when the store is empty.
    pub fn average_age(&self) -> Result<Option<f64>, PatientRecordsError> {
        let store = self.store.lock()?;
        Ok(store.average_age())
    }

    /// Mean per-record BMI, or none when the store is empty.
    pub fn average_bmi(&self) -> Result<Option<f64>, PatientRecordsError> {
        let store = self.store.lock()?;
        Ok(store.average_bmi())
    }

    /// Record count with both averages.
    pub fn stats(&self) -> Result<FfiRecordStats, PatientRecordsError> {
        let store = self.store.lock()?;
        Ok(store.stats().into())
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export all records as JSON.
    pub fn export_json(&self) -> Result<String, PatientRecordsError> {
        let store = self.store.lock()?;
        Ok(store.to_json()?)
    }

    /// Import records from JSON. Nothing is imported if any record is invalid.
    pub fn import_json(&self, json: String) -> Result<u64, PatientRecordsError> {
        let mut store = self.store.lock()?;
        Ok(store.import_json(&json)? as u64)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PatientRecord> for FfiPatientRecord {
    fn from(record: PatientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            age: record.age,
            weight: record.weight,
            height: record.height,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// FFI-safe partial update.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiPatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl From<FfiPatientUpdate> for PatientUpdate {
    fn from(update: FfiPatientUpdate) -> Self {
        PatientUpdate {
            name: update.name,
            age: update.age,
            weight: update.weight,
            height: update.height,
        }
    }
}

/// FFI-safe statistics snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecordStats {
    pub count: u64,
    pub average_age: Option<f64>,
    pub average_bmi: Option<f64>,
}

impl From<RecordStats> for FfiRecordStats {
    fn from(stats: RecordStats) -> Self {
        Self {
            count: stats.count as u64,
            average_age: stats.average_age,
            average_bmi: stats.average_bmi,
        }
    }
}
