//! The error code catalog.
//!
//! Every failure the system reports carries exactly one [`ErrorCode`]: a stable,
//! namespaced identifier, a fallback message, and a fixed HTTP-equivalent status.
//! Codes are plain `const` values so call sites can name them directly:
//!
//! ```rust
//! use service_errors::{catalog, ErrorCode};
//!
//! pub const OUT_OF_STOCK: ErrorCode =
//!     ErrorCode::new("order.out_of_stock", "Item is out of stock", 409);
//!
//! assert_eq!(catalog::NOT_FOUND.status(), 404);
//! assert_eq!(OUT_OF_STOCK.code(), "order.out_of_stock");
//! ```
//!
//! An [`ErrorCatalog`] indexes codes for lookup by string. It is append-only:
//! registering a code a second time fails, so a released code can never change
//! its status. The process-wide catalog starts with the built-in families and
//! can be replaced exactly once at startup with [`install`].

use crate::error::{CatalogError, CatalogResult};
use once_cell::sync::{Lazy, OnceCell};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Classification
// ============================================================================

/// Client/server split of a status, i.e. 4xx versus 5xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFamily {
    /// The caller can fix the request (4xx).
    Client,
    /// Something failed on our side (5xx).
    Server,
}

/// Severity used by the logging collaborator to pick a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Server-side failure. Should be investigated.
    Error,
    /// Rejected credentials or permissions. Worth monitoring.
    Warning,
    /// Expected client mistake (validation, not found, conflict).
    Info,
}

// ============================================================================
// ErrorCode
// ============================================================================

/// Immutable catalog entry.
///
/// Equality and hashing consider only [`code`](Self::code): two entries with the
/// same identifier are the same error kind.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorCode {
    code: &'static str,
    default_message: &'static str,
    status: u16,
}

impl ErrorCode {
    /// Define a code. Validation happens on [`ErrorCatalog::register`].
    pub const fn new(code: &'static str, default_message: &'static str, status: u16) -> Self {
        Self {
            code,
            default_message,
            status,
        }
    }

    /// Stable machine-readable identifier, e.g. `"common.not_found"`.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Message used when the raising site does not supply one.
    pub const fn default_message(&self) -> &'static str {
        self.default_message
    }

    /// Fixed HTTP-equivalent status.
    pub const fn status(&self) -> u16 {
        self.status
    }

    pub fn family(&self) -> StatusFamily {
        if self.status >= 500 {
            StatusFamily::Server
        } else {
            StatusFamily::Client
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.status {
            500.. => ErrorSeverity::Error,
            401 | 403 => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

// ============================================================================
// Built-in families
// ============================================================================

/// Client input is malformed or violates a rule.
pub const VALIDATION_FAILED: ErrorCode =
    ErrorCode::new("common.validation_failed", "Validation failed", 400);

/// Credentials are missing or invalid.
pub const UNAUTHORIZED: ErrorCode =
    ErrorCode::new("common.unauthorized", "Authentication required", 401);

/// Authenticated, but not allowed to perform the operation.
pub const FORBIDDEN: ErrorCode = ErrorCode::new("common.forbidden", "Access denied", 403);

/// The referenced resource does not exist.
pub const NOT_FOUND: ErrorCode = ErrorCode::new("common.not_found", "Resource not found", 404);

/// A state precondition was violated.
pub const CONFLICT: ErrorCode = ErrorCode::new(
    "common.conflict",
    "Request conflicts with current state",
    409,
);

/// Unexpected or infrastructure failure.
pub const INTERNAL_ERROR: ErrorCode = ErrorCode::new(
    "common.internal_error",
    "An unexpected error occurred",
    500,
);

/// All built-in codes, in status order.
pub const BUILTIN_CODES: [ErrorCode; 6] = [
    VALIDATION_FAILED,
    UNAUTHORIZED,
    FORBIDDEN,
    NOT_FOUND,
    CONFLICT,
    INTERNAL_ERROR,
];

// Lowercase segments separated by dots, at least two segments.
static CODE_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)+$").ok());

fn check_entry(code: &ErrorCode) -> CatalogResult<()> {
    let well_formed = CODE_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(code.code));
    if !well_formed {
        return Err(CatalogError::InvalidCode {
            code: code.code.to_string(),
        });
    }
    if !(400..=599).contains(&code.status) {
        return Err(CatalogError::InvalidStatus {
            code: code.code.to_string(),
            status: code.status,
        });
    }
    Ok(())
}

// ============================================================================
// ErrorCatalog
// ============================================================================

/// Append-only index of error codes.
#[derive(Debug, Clone, Default)]
pub struct ErrorCatalog {
    entries: HashMap<&'static str, ErrorCode>,
}

impl ErrorCatalog {
    /// A catalog with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog holding the six built-in families.
    pub fn with_builtins() -> Self {
        let entries = BUILTIN_CODES
            .iter()
            .map(|code| (code.code, *code))
            .collect();
        Self { entries }
    }

    /// Add a code.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidCode`] if the identifier is not namespaced
    /// - [`CatalogError::InvalidStatus`] if the status is not 4xx/5xx
    /// - [`CatalogError::DuplicateCode`] if the identifier is already present
    pub fn register(&mut self, code: ErrorCode) -> CatalogResult<()> {
        check_entry(&code)?;
        if self.entries.contains_key(code.code) {
            return Err(CatalogError::DuplicateCode {
                code: code.code.to_string(),
            });
        }
        self.entries.insert(code.code, code);
        Ok(())
    }

    /// Chaining form of [`register`](Self::register).
    pub fn with(mut self, code: ErrorCode) -> CatalogResult<Self> {
        self.register(code)?;
        Ok(self)
    }

    /// Find the entry for `code`.
    pub fn lookup(&self, code: &str) -> CatalogResult<ErrorCode> {
        self.entries
            .get(code)
            .copied()
            .ok_or_else(|| CatalogError::UnknownCode {
                code: code.to_string(),
            })
    }

    /// Status bound to `code`, if it is defined.
    pub fn status_of(&self, code: &str) -> Option<u16> {
        self.entries.get(code).map(ErrorCode::status)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by code.
    pub fn codes(&self) -> Vec<ErrorCode> {
        let mut codes: Vec<ErrorCode> = self.entries.values().copied().collect();
        codes.sort_by_key(|code| code.code);
        codes
    }

    fn check_builtins(&self) -> CatalogResult<()> {
        for builtin in BUILTIN_CODES {
            match self.entries.get(builtin.code) {
                Some(entry) if entry.status == builtin.status => {}
                _ => {
                    return Err(CatalogError::MissingBuiltin {
                        code: builtin.code.to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Process-wide catalog
// ============================================================================

static INSTALLED: OnceCell<ErrorCatalog> = OnceCell::new();
static BUILTIN: Lazy<ErrorCatalog> = Lazy::new(ErrorCatalog::with_builtins);

/// Replace the process-wide catalog. Call once during startup.
///
/// # Errors
///
/// - [`CatalogError::MissingBuiltin`] if a built-in family is absent or has a
///   different status
/// - [`CatalogError::AlreadyInstalled`] on every call after the first success
pub fn install(catalog: ErrorCatalog) -> CatalogResult<()> {
    catalog.check_builtins()?;
    INSTALLED
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInstalled)
}

/// The installed catalog, or the built-ins if nothing was installed.
pub fn global() -> &'static ErrorCatalog {
    INSTALLED.get().unwrap_or_else(|| Lazy::force(&BUILTIN))
}

/// Look up `code` in the process-wide catalog.
pub fn lookup(code: &str) -> CatalogResult<ErrorCode> {
    global().lookup(code)
}

/// Status of `code` in the process-wide catalog.
pub fn status_of(code: &str) -> Option<u16> {
    global().status_of(code)
}
