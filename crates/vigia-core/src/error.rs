//! Error types for Vigia Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// No warehouse was selected before building a request
    #[error("No warehouse selected")]
    MissingWarehouse,

    /// Scenario index outside the fixed scenario list
    #[error("Scenario index out of range: {0}")]
    ScenarioOutOfRange(usize),

    /// Measure toggle vector does not cover the fixed measure list
    #[error("Measure selection has {got} entries, catalog has {expected}")]
    MeasureSelectionMismatch { got: usize, expected: usize },

    /// A UI label has no backend code in the static tables.
    /// Labels must never be sent as free text.
    #[error("No backend code for label: {0}")]
    UnmappedLabel(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
