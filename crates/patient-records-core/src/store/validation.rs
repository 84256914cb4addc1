//! Field validation for patient records.

use thiserror::Error;

use crate::models::{PatientRecord, PatientUpdate};

/// A rejected field value. Rules are checked in declaration order and the
/// first failure is reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Patient ID must be a non-empty string")]
    EmptyId,

    #[error("Name must be a non-empty string")]
    EmptyName,

    #[error("Age must be a positive integer")]
    NonPositiveAge,

    #[error("Weight must be a positive number, got {0}")]
    NonPositiveWeight(f64),

    #[error("Height must be a positive number, got {0}")]
    NonPositiveHeight(f64),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyId => "id",
            ValidationError::EmptyName => "name",
            ValidationError::NonPositiveAge => "age",
            ValidationError::NonPositiveWeight(_) => "weight",
            ValidationError::NonPositiveHeight(_) => "height",
        }
    }
}

/// Validate all five fields of a new record.
pub fn validate(
    id: &str,
    name: &str,
    age: u32,
    weight: f64,
    height: f64,
) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    validate_name(name)?;
    validate_age(age)?;
    validate_weight(weight)?;
    validate_height(height)
}

/// Validate a full record.
pub fn validate_record(record: &PatientRecord) -> Result<(), ValidationError> {
    validate(
        &record.id,
        &record.name,
        record.age,
        record.weight,
        record.height,
    )
}

/// Validate only the fields an update supplies.
pub fn validate_update(update: &PatientUpdate) -> Result<(), ValidationError> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(age) = update.age {
        validate_age(age)?;
    }
    if let Some(weight) = update.weight {
        validate_weight(weight)?;
    }
    if let Some(height) = update.height {
        validate_height(height)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn validate_age(age: u32) -> Result<(), ValidationError> {
    if age == 0 {
        return Err(ValidationError::NonPositiveAge);
    }
    Ok(())
}

// NaN and infinities fail; serde_json cannot represent non-finite floats.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !is_positive(weight) {
        return Err(ValidationError::NonPositiveWeight(weight));
    }
    Ok(())
}

fn validate_height(height: f64) -> Result<(), ValidationError> {
    if !is_positive(height) {
        return Err(ValidationError::NonPositiveHeight(height));
    }
    Ok(())
}
