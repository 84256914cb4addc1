//! Domain models for the patient records store.

mod patient;
mod stats;

pub use patient::*;
pub use stats::*;
