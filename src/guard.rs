//! Precondition helpers for raising code.
//!
//! Each guard returns `Err(StructuredError)` when its check fails, so call sites
//! read as a single `?` line:
//!
//! ```rust
//! use service_errors::{catalog, guard, StructuredError};
//!
//! fn reserve(stock: u32, wanted: u32) -> Result<u32, StructuredError> {
//!     guard::require(wanted > 0, catalog::VALIDATION_FAILED, "quantity must be positive")?;
//!     guard::require_with(stock >= wanted, catalog::CONFLICT, || {
//!         format!("only {stock} left, {wanted} requested")
//!     })?;
//!     Ok(stock - wanted)
//! }
//!
//! assert_eq!(reserve(5, 2).unwrap(), 3);
//! assert_eq!(reserve(1, 2).unwrap_err().message(), "only 1 left, 2 requested");
//! ```

use crate::catalog::ErrorCode;
use crate::exception::StructuredError;

/// Fail with `code` and `message` unless `condition` holds.
pub fn require(
    condition: bool,
    code: ErrorCode,
    message: impl Into<String>,
) -> Result<(), StructuredError> {
    if condition {
        Ok(())
    } else {
        Err(StructuredError::builder(code).message(message).build())
    }
}

/// Like [`require`], but the message is only computed on failure.
pub fn require_with<F>(condition: bool, code: ErrorCode, message: F) -> Result<(), StructuredError>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(StructuredError::builder(code).message(message()).build())
    }
}

/// Unwrap `value`, failing with `code` and `message` on `None`.
pub fn require_some<T>(
    value: Option<T>,
    code: ErrorCode,
    message: impl Into<String>,
) -> Result<T, StructuredError> {
    value.ok_or_else(|| StructuredError::builder(code).message(message).build())
}

/// Like [`require_some`], with a lazily computed message.
pub fn require_some_with<T, F>(
    value: Option<T>,
    code: ErrorCode,
    message: F,
) -> Result<T, StructuredError>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| StructuredError::builder(code).message(message()).build())
}
