use crate::catalog::{self, ErrorCode, StatusFamily};
use crate::error::{ConfigError, ConfigResult};

/// Fixed texts and fallback codes used by the [`Translator`](crate::Translator).
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Message for unrecognized errors. Never derived from the error itself.
    pub internal_message: String,

    /// Message for field-violation bundles.
    pub validation_message: String,

    /// Code reported for field-violation bundles. Must be 4xx.
    pub validation_code: ErrorCode,

    /// Code reported for unrecognized errors. Must be 5xx.
    pub internal_code: ErrorCode,

    /// Put `{"errorId": ..}` in the details of internal-failure envelopes.
    pub expose_error_id: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            internal_message: catalog::INTERNAL_ERROR.default_message().to_string(),
            validation_message: catalog::VALIDATION_FAILED.default_message().to_string(),
            validation_code: catalog::VALIDATION_FAILED,
            internal_code: catalog::INTERNAL_ERROR,
            expose_error_id: true,
        }
    }
}

impl TranslatorConfig {
    /// Validate translator configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMessage`] if either fixed message is blank, or
    /// [`ConfigError::WrongFamily`] if the validation code is not a client
    /// status or the internal code is not a server status.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.internal_message.trim().is_empty() {
            return Err(ConfigError::EmptyMessage {
                field: "internal_message",
            });
        }
        if self.validation_message.trim().is_empty() {
            return Err(ConfigError::EmptyMessage {
                field: "validation_message",
            });
        }
        check_family("validation_code", self.validation_code, StatusFamily::Client)?;
        check_family("internal_code", self.internal_code, StatusFamily::Server)?;
        Ok(())
    }
}

fn check_family(field: &'static str, code: ErrorCode, expected: StatusFamily) -> ConfigResult<()> {
    let in_range = (400..=599).contains(&code.status());
    if in_range && code.family() == expected {
        return Ok(());
    }
    Err(ConfigError::WrongFamily {
        field,
        code: code.code().to_string(),
        status: code.status(),
        expected,
    })
}
