//! Error types for table rendering.
//!
//! There are two tiers of failure:
//!
//! - [`DatatableError`] aborts the rendering of a single table occurrence.
//!   The caller keeps the original element untouched.
//! - [`CellError`] is local to one cell. The cell renders empty and the
//!   failure is reported through [`RenderResult::diagnostics`](crate::RenderResult).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort rendering of one table occurrence.
#[derive(Debug, Error)]
pub enum DatatableError {
    /// The element does not name a data source.
    #[error("table has no data source attribute (data-yaml)")]
    MissingSource,

    /// The data source reference does not resolve to a readable file.
    #[error("data source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The data source exists but is not valid structured data.
    #[error("failed to parse data source {}: {message}", path.display())]
    SourceParse { path: PathBuf, message: String },

    /// A table-level option carries a value outside its accepted set.
    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOption { name: String, value: String },

    /// A header cell declares a colspan that is not a number.
    #[error("invalid colspan '{value}' on header cell")]
    InvalidColspan { value: String },

    /// Session configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for DatatableError {
    fn from(err: serde_yaml::Error) -> Self {
        DatatableError::Config(err.to_string())
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, DatatableError>;

/// A non-fatal formatting failure for a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// An interval or plus-minus value type received a value of the wrong shape.
    #[error("value '{raw}' does not match the interval shape")]
    IntervalMismatch { raw: String },

    /// The value cannot be represented under the declared value type.
    #[error("cannot format '{raw}' as {value_type}")]
    FormatOverflow { value_type: String, raw: String },
}
