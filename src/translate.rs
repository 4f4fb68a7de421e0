//! Translation of any raised error into one [`ErrorEnvelope`].
//!
//! The boundary hands over whatever propagated as a [`Raised`] value, and the
//! [`Translator`] classifies it in fixed priority order:
//!
//! 1. [`Raised::Structured`]: code, message, status and context come straight
//!    from the [`StructuredError`].
//! 2. [`Raised::Validation`]: the validation code and fixed message, with one
//!    `details` entry per offending field.
//! 3. [`Raised::Other`]: the internal code and a fixed generic message. The
//!    foreign error's text only reaches [`Translation::diagnostic`], which is
//!    for logs and never serialized.
//!
//! A structured error built with the validation code still follows rule 1.
//!
//! ```rust
//! use service_errors::{translate, Raised, StructuredError};
//!
//! let raised = Raised::from(StructuredError::not_found("Order 42 not found"));
//! let translation = translate(&raised);
//!
//! assert_eq!(translation.status(), 404);
//! assert_eq!(translation.envelope().code(), "common.not_found");
//! assert_eq!(translation.envelope().message(), "Order 42 not found");
//! ```

use crate::catalog::ErrorCode;
use crate::config::TranslatorConfig;
use crate::envelope::ErrorEnvelope;
use crate::error::ConfigResult;
use crate::exception::{escape_line, StructuredError};
use crate::violation::ValidationErrors;
use serde_json::{Map, Value};
use uuid::Uuid;

type ForeignError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can reach the boundary.
///
/// Errors carried in an `anyhow::Error` must enter through
/// `From<anyhow::Error>`. Once anyhow has been converted into a
/// `Box<dyn Error>`, its wrapper hides the original type and the value is
/// treated as [`Raised::Other`].
#[derive(Debug)]
pub enum Raised {
    Structured(StructuredError),
    Validation(ValidationErrors),
    Other(ForeignError),
}

impl Raised {
    /// Classify an arbitrary error, recognizing the two known types.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::from(Box::new(err) as ForeignError)
    }
}

impl From<StructuredError> for Raised {
    fn from(err: StructuredError) -> Self {
        Self::Structured(err)
    }
}

impl From<ValidationErrors> for Raised {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<ForeignError> for Raised {
    fn from(err: ForeignError) -> Self {
        let err = match err.downcast::<StructuredError>() {
            Ok(structured) => return Self::Structured(*structured),
            Err(err) => err,
        };
        match err.downcast::<ValidationErrors>() {
            Ok(errors) => Self::Validation(*errors),
            Err(err) => Self::Other(err),
        }
    }
}

impl From<anyhow::Error> for Raised {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<StructuredError>() {
            Ok(structured) => return Self::Structured(structured),
            Err(err) => err,
        };
        match err.downcast::<ValidationErrors>() {
            Ok(errors) => Self::Validation(errors),
            Err(err) => Self::Other(err.into()),
        }
    }
}

/// Result of translating one raised error.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    status: u16,
    code: ErrorCode,
    envelope: ErrorEnvelope,
    error_id: Uuid,
    diagnostic: String,
}

impl Translation {
    /// Transport status to send with the envelope.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn envelope(&self) -> &ErrorEnvelope {
        &self.envelope
    }

    /// Correlation id: the id of the structured error that was raised (directly
    /// or somewhere in a foreign error's source chain), otherwise a fresh one.
    pub fn error_id(&self) -> Uuid {
        self.error_id
    }

    /// Log-only text. May contain internal details; never send it to clients.
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    pub fn into_envelope(self) -> ErrorEnvelope {
        self.envelope
    }

    /// `(status, envelope)`, the pair a transport needs.
    pub fn into_parts(self) -> (u16, ErrorEnvelope) {
        (self.status, self.envelope)
    }
}

/// Stateless mapper from [`Raised`] to [`Translation`].
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    /// # Errors
    ///
    /// Returns the [`ConfigError`](crate::ConfigError) from
    /// [`TranslatorConfig::validate`].
    pub fn new(config: TranslatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn translate(&self, raised: &Raised) -> Translation {
        match raised {
            Raised::Structured(err) => self.translate_structured(err),
            Raised::Validation(errors) => self.translate_validation(errors),
            Raised::Other(err) => self.translate_foreign(&**err),
        }
    }

    fn translate_structured(&self, err: &StructuredError) -> Translation {
        let code = err.code();
        Translation {
            status: code.status(),
            code,
            envelope: ErrorEnvelope::new(code.code(), err.message(), Some(err.context().clone())),
            error_id: err.error_id(),
            diagnostic: err.log_line(),
        }
    }

    fn translate_validation(&self, errors: &ValidationErrors) -> Translation {
        let code = self.config.validation_code;
        let error_id = Uuid::new_v4();
        Translation {
            status: code.status(),
            code,
            envelope: ErrorEnvelope::new(
                code.code(),
                self.config.validation_message.as_str(),
                Some(errors.to_details()),
            ),
            error_id,
            diagnostic: format!(
                "code={} status={} error_id={} violations=\"{}\"",
                code.code(),
                code.status(),
                error_id,
                escape_line(&errors.summary()),
            ),
        }
    }

    fn translate_foreign(&self, err: &(dyn std::error::Error + 'static)) -> Translation {
        let code = self.config.internal_code;
        let error_id = stamped_error_id(err).unwrap_or_else(Uuid::new_v4);
        let details = self.config.expose_error_id.then(|| {
            let mut details = Map::new();
            details.insert("errorId".to_string(), Value::String(error_id.to_string()));
            details
        });
        Translation {
            status: code.status(),
            code,
            envelope: ErrorEnvelope::new(code.code(), self.config.internal_message.as_str(), details),
            error_id,
            diagnostic: format!(
                "code={} status={} error_id={} foreign=\"{}\"",
                code.code(),
                code.status(),
                error_id,
                escape_line(&render_chain(err)),
            ),
        }
    }
}

/// Translate with the default configuration.
pub fn translate(raised: &Raised) -> Translation {
    Translator::default().translate(raised)
}

/// Id of the first structured error in the chain, if one was raised underneath.
fn stamped_error_id(err: &(dyn std::error::Error + 'static)) -> Option<Uuid> {
    std::iter::successors(Some(err), |err| err.source())
        .find_map(|err| err.downcast_ref::<StructuredError>())
        .map(StructuredError::error_id)
}

fn render_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
