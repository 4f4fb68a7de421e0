//! Error types for the catalog and translator setup.
//!
//! These are the crate's own failure modes, distinct from the
//! [`StructuredError`](crate::StructuredError) values it helps callers build.
//! Both surface only at startup: registering codes into an
//! [`ErrorCatalog`](crate::ErrorCatalog) and validating a
//! [`TranslatorConfig`](crate::TranslatorConfig).
//!
//! # Example
//!
//! ```rust
//! use service_errors::{CatalogError, ErrorCatalog, ErrorCode};
//!
//! let mut catalog = ErrorCatalog::with_builtins();
//! catalog.register(ErrorCode::new("order.out_of_stock", "Item is out of stock", 409))?;
//!
//! let again = catalog.register(ErrorCode::new("order.out_of_stock", "Other text", 400));
//! assert!(matches!(again, Err(CatalogError::DuplicateCode { .. })));
//! # Ok::<(), CatalogError>(())
//! ```

use crate::catalog::StatusFamily;
use thiserror::Error;

/// Result alias for catalog registration and lookup.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Result alias for translator configuration checks.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Failures while defining or querying the error code catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry exists for the requested code.
    #[error("Unknown error code: {code}")]
    UnknownCode {
        /// The code that was looked up.
        code: String,
    },

    /// The code is already defined. Released codes are never redefined.
    #[error("Error code already registered: {code}")]
    DuplicateCode {
        /// The code that was registered twice.
        code: String,
    },

    /// The code is not a lowercase, dot-namespaced identifier.
    #[error("Error code is not a namespaced identifier: {code}")]
    InvalidCode {
        /// The rejected code.
        code: String,
    },

    /// The status is outside the 4xx/5xx range.
    #[error("Error code {code} has status {status}, expected 400..=599")]
    InvalidStatus {
        /// The code carrying the bad status.
        code: String,
        /// The rejected status.
        status: u16,
    },

    /// A catalog being installed lacks one of the built-in families.
    #[error("Catalog is missing built-in code {code}")]
    MissingBuiltin {
        /// The built-in code that is absent or redefined.
        code: String,
    },

    /// The process-wide catalog can only be installed once.
    #[error("Process-wide error catalog is already installed")]
    AlreadyInstalled,
}

/// Invalid [`TranslatorConfig`](crate::TranslatorConfig) values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A fixed envelope message was left empty.
    #[error("Translator configuration error: {field} must not be empty")]
    EmptyMessage {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A fallback code belongs to the wrong status family.
    #[error(
        "Translator configuration error: {field} uses {code} with status {status}, expected {expected:?} family"
    )]
    WrongFamily {
        /// Name of the offending field.
        field: &'static str,
        /// The configured code.
        code: String,
        /// Its status.
        status: u16,
        /// The family the field requires.
        expected: StatusFamily,
    },
}
