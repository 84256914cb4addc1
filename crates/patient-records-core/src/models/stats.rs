//! Aggregate statistics over stored records.

use serde::{Deserialize, Serialize};

use super::PatientRecord;

/// Snapshot of store-wide statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordStats {
    /// Number of stored records
    pub count: usize,
    /// Mean age, `None` when empty
    pub average_age: Option<f64>,
    /// Mean of per-record BMI, `None` when empty
    pub average_bmi: Option<f64>,
}

impl RecordStats {
    /// Compute statistics over a set of records.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PatientRecord> + Clone,
    {
        Self {
            count: records.clone().into_iter().count(),
            average_age: average_age(records.clone()),
            average_bmi: average_bmi(records),
        }
    }
}

/// Arithmetic mean of `age`, or `None` for no records.
pub fn average_age<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    mean(records.into_iter().map(|r| f64::from(r.age)))
}

/// Unweighted mean of per-record BMI, or `None` for no records.
pub fn average_bmi<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    mean(records.into_iter().map(PatientRecord::bmi))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
