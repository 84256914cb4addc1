//! Store configuration.

use serde::{Deserialize, Serialize};

/// How `update` treats supplied field values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Supplied values replace prior ones verbatim.
    #[default]
    Unchecked,
    /// Supplied values must pass the same rules as `add`.
    Validated,
}

/// Record store configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub update_policy: UpdatePolicy,
}

impl StoreConfig {
    /// Configuration that validates every updated field.
    pub fn validated() -> Self {
        Self {
            update_policy: UpdatePolicy::Validated,
        }
    }

    /// Parse configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
