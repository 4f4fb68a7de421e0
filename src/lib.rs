//! # service-errors
//!
//! Shared error-handling core for service modules: a closed catalog of error
//! codes, immutable structured errors built from it, and a translator that turns
//! whatever was raised into one response envelope.
//!
//! ## Key Features
//!
//! - **Error Catalog**: Stable namespaced codes, each bound to one status
//! - **Structured Errors**: Builder with context, causes, and error-id stamping
//! - **Validation Bundles**: Field-keyed violations kept apart from coded errors
//! - **Translation**: Fixed-priority dispatch onto a single wire envelope that
//!   never leaks the text of unrecognized errors
//!
//! ## Example
//!
//! ```rust
//! use service_errors::{catalog, translate, Raised, StructuredError};
//!
//! fn load_order(id: u64) -> anyhow::Result<String> {
//!     Err(StructuredError::builder(catalog::NOT_FOUND)
//!         .message_fmt(format_args!("Order {id} not found"))
//!         .context("orderId", id)
//!         .build()
//!         .into())
//! }
//!
//! let err = load_order(7).unwrap_err();
//! let (status, envelope) = translate(&Raised::from(err)).into_parts();
//!
//! assert_eq!(status, 404);
//! assert!(!envelope.success());
//! assert_eq!(envelope.message(), "Order 7 not found");
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod catalog;
pub mod config;
pub mod envelope;
pub mod error;
pub mod exception;
pub mod guard;
pub mod report;
pub mod translate;
pub mod violation;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use catalog::{ErrorCatalog, ErrorCode, ErrorSeverity, StatusFamily};
pub use config::TranslatorConfig;
pub use envelope::{ErrorBody, ErrorEnvelope, SuccessEnvelope};
pub use error::{CatalogError, CatalogResult, ConfigError, ConfigResult};
pub use exception::{ErrorBuilder, ErrorContext, SharedCause, StructuredError};
pub use translate::{translate, Raised, Translation, Translator};
pub use violation::{FieldViolation, Validate, ValidationErrors};
