//! # Error Types
//!
//! Structured error types for trowel_core. Every estimator validates its
//! input eagerly and fails with [`CalcError::InvalidInput`] before doing any
//! arithmetic, so a caller never sees a partial result.
//!
//! The `Display` text of `InvalidInput` is the bare `reason` sentence. Front
//! ends show it to the user verbatim, so those sentences are stable.
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_m2: f64) -> CalcResult<()> {
//!     if area_m2 <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area_m2",
//!             area_m2.to_string(),
//!             "Area must be greater than zero.",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = validate_area(0.0).unwrap_err();
//! assert_eq!(err.to_string(), "Area must be greater than zero.");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for trowel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of range or otherwise unusable
    #[error("{reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required value was not supplied and has no default
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Adhesive (or other) product key not present in the catalog
    #[error("Product not found: {product}")]
    ProductNotFound { product: String },

    /// Unit code not recognized by the conversion tables
    #[error("Unknown {family} unit: {unit}")]
    UnknownUnit { family: String, unit: String },

    /// Settings or job file could not be parsed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ProductNotFound error
    pub fn product_not_found(product: impl Into<String>) -> Self {
        CalcError::ProductNotFound {
            product: product.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(family: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            family: family.into(),
            unit: unit.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if this is a field-level error
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::MissingField { field } => {
                Some(field)
            }
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::ProductNotFound { .. } => "PRODUCT_NOT_FOUND",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}
