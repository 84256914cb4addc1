//! Patient models.

use serde::{Deserialize, Serialize};

/// A validated patient record keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// Caller-assigned identifier, immutable once stored
    pub id: String,
    /// Patient name
    pub name: String,
    /// Age in whole years
    pub age: u32,
    /// Weight in kg
    pub weight: f64,
    /// Height in meters
    pub height: f64,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl PatientRecord {
    /// Create a new record. Does not validate; see [`crate::store::validate`].
    pub fn new(id: String, name: String, age: u32, weight: f64, height: f64) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            name,
            age,
            weight,
            height,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Body Mass Index: weight / height².
    pub fn bmi(&self) -> f64 {
        self.weight / (self.height * self.height)
    }

    /// Apply the supplied fields of a partial update.
    ///
    /// Returns true if any field was supplied.
    pub fn apply(&mut self, update: &PatientUpdate) -> bool {
        if update.is_empty() {
            return false;
        }
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}

/// Partial update for an existing record. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl PatientUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// True if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.weight.is_none() && self.height.is_none()
    }
}
