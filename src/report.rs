//! Adapter for the logging collaborator.
//!
//! Construction and translation never log. The boundary calls into this module
//! after translating, so every failure produces exactly one structured event
//! keyed by its `error_id`.
//!
//! | Severity | Statuses          | Level   |
//! |----------|-------------------|---------|
//! | Error    | 5xx               | `error` |
//! | Warning  | 401, 403          | `warn`  |
//! | Info     | other 4xx         | `info`  |

use crate::catalog::ErrorSeverity;
use crate::exception::StructuredError;
use crate::logging::{log_error, log_info, log_warn};
use crate::translate::Translation;

/// Emit one event for a finished translation.
pub fn log_translation(translation: &Translation) {
    let code = translation.code();
    match code.severity() {
        ErrorSeverity::Error => log_error!(
            error_id = %translation.error_id(),
            code = code.code(),
            status = translation.status(),
            diagnostic = %translation.diagnostic(),
            "Request failed with server error"
        ),
        ErrorSeverity::Warning => log_warn!(
            error_id = %translation.error_id(),
            code = code.code(),
            status = translation.status(),
            diagnostic = %translation.diagnostic(),
            "Request rejected by access control"
        ),
        ErrorSeverity::Info => log_info!(
            error_id = %translation.error_id(),
            code = code.code(),
            status = translation.status(),
            diagnostic = %translation.diagnostic(),
            "Request failed with client error"
        ),
    }
}

/// Emit one event for a structured error that is handled without reaching the
/// boundary, e.g. a background job.
pub fn log_structured(err: &StructuredError) {
    let line = err.log_line();
    match err.code().severity() {
        ErrorSeverity::Error => log_error!(error_id = %err.error_id(), "{line}"),
        ErrorSeverity::Warning => log_warn!(error_id = %err.error_id(), "{line}"),
        ErrorSeverity::Info => log_info!(error_id = %err.error_id(), "{line}"),
    }
}
