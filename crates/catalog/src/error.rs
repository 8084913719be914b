//! Error types for the catalog crate.
//!
//! Everything that can go wrong while reading a catalog snapshot or a
//! stored profile ends up here. The ranker itself never fails; these errors
//! belong to the code that produces its inputs.

use thiserror::Error;

/// Errors that can occur while loading catalogs and profile data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A JSON document couldn't be decoded (or encoded)
    #[error("JSON error in {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog entries share the same identifier
    #[error("Duplicate product id in catalog: {id}")]
    DuplicateId { id: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
