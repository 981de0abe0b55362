//! Domain error model.

use thiserror::Error;

/// Result type used across the prediction/reporting pipeline.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Pipeline-level error.
///
/// Every variant is user-reportable; nothing here is transient or
/// retryable. A request either fully succeeds or fails with one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// The model artifact is missing or corrupt (fatal at startup).
    #[error("model artifact could not be loaded: {0}")]
    ModelLoad(String),

    /// The designated feature column does not exist in the input table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// The designated column (or scorer output) has the wrong shape,
    /// e.g. non-numeric cells or a length mismatch.
    #[error("bad feature shape: {0}")]
    Shape(String),

    /// The uploaded bytes could not be parsed into a table.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A report (CSV/PDF) could not be rendered.
    #[error("report rendering failed: {0}")]
    Render(String),
}

impl ForecastError {
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound(name.into())
    }

    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    pub fn malformed_input(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

