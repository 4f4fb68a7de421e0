//! Structured errors and their builder.
//!
//! A [`StructuredError`] is the value raising code hands back up the call chain.
//! It pins one catalog [`ErrorCode`], a resolved message, an optional cause, and
//! diagnostic context. Each built value gets a fresh `error_id` and timestamp so
//! a user-visible report can be matched with server logs.
//!
//! # Example
//!
//! ```rust
//! use service_errors::{catalog, StructuredError};
//!
//! let order_id = 42;
//! let err = StructuredError::builder(catalog::NOT_FOUND)
//!     .message_fmt(format_args!("Order {order_id} not found"))
//!     .context("orderId", order_id)
//!     .build();
//!
//! assert_eq!(err.status(), 404);
//! assert_eq!(err.message(), "Order 42 not found");
//! assert!(err.log_line().contains("code=common.not_found"));
//! ```

use crate::catalog::{self, ErrorCode};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Ordered diagnostic key-value data.
pub type ErrorContext = Map<String, Value>;

/// A cause shared read-only between every holder of the chain.
pub type SharedCause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Context placeholder for a value that could not be serialized.
pub const UNSERIALIZABLE: &str = "<unserializable>";

type MessageSupplier = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
enum MessageSource {
    Default,
    Resolved(String),
    Deferred(MessageSupplier),
}

impl fmt::Debug for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Resolved(text) => f.debug_tuple("Resolved").field(text).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Chained construction of a [`StructuredError`].
///
/// The builder is `Clone`: building two clones yields errors with equal
/// content and distinct `error_id`s.
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct ErrorBuilder {
    code: ErrorCode,
    message: MessageSource,
    cause: Option<SharedCause>,
    context: ErrorContext,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: MessageSource::Default,
            cause: None,
            context: ErrorContext::new(),
        }
    }

    /// Use `message` instead of the code's default message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = MessageSource::Resolved(message.into());
        self
    }

    /// Positional formatting, resolved immediately.
    ///
    /// ```rust
    /// # use service_errors::{catalog, StructuredError};
    /// let err = StructuredError::builder(catalog::CONFLICT)
    ///     .message_fmt(format_args!("{} already has {} items", "cart", 3))
    ///     .build();
    /// assert_eq!(err.message(), "cart already has 3 items");
    /// ```
    pub fn message_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.message(fmt::format(args))
    }

    /// Deferred message, evaluated exactly once inside [`build`](Self::build).
    pub fn message_with<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.message = MessageSource::Deferred(Arc::new(supplier));
        self
    }

    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Attach an already boxed cause, e.g. one converted from `anyhow::Error`.
    pub fn boxed_cause(mut self, cause: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        self.cause = Some(Arc::from(cause));
        self
    }

    /// Attach a cause that other holders keep a reference to.
    pub fn shared_cause(mut self, cause: SharedCause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Add a context entry. A repeated key keeps only the last value.
    pub fn context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Add a context entry from any serializable value.
    ///
    /// A value that fails to serialize is recorded as [`UNSERIALIZABLE`].
    pub fn context_serialized(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value)
            .unwrap_or_else(|_| Value::String(UNSERIALIZABLE.to_string()));
        self.context.insert(key.into(), value);
        self
    }

    /// Finish construction, stamping a fresh id and timestamp.
    pub fn build(self) -> StructuredError {
        let message = match self.message {
            MessageSource::Default => self.code.default_message().to_string(),
            MessageSource::Resolved(text) => text,
            MessageSource::Deferred(supplier) => supplier(),
        };
        StructuredError {
            code: self.code,
            message,
            cause: self.cause,
            context: self.context,
            error_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// StructuredError
// ============================================================================

/// An immutable, catalog-coded error.
///
/// The status is always the status of the code. Cloning shares the cause chain
/// and keeps the same `error_id`.
#[derive(Debug, Clone)]
pub struct StructuredError {
    code: ErrorCode,
    message: String,
    cause: Option<SharedCause>,
    context: ErrorContext,
    error_id: Uuid,
    timestamp: DateTime<Utc>,
}

impl StructuredError {
    pub fn builder(code: ErrorCode) -> ErrorBuilder {
        ErrorBuilder::new(code)
    }

    /// Build with the code's default message and nothing else.
    pub fn new(code: ErrorCode) -> Self {
        ErrorBuilder::new(code).build()
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::builder(catalog::VALIDATION_FAILED)
            .message(message)
            .build()
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::builder(catalog::UNAUTHORIZED).message(message).build()
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::builder(catalog::FORBIDDEN).message(message).build()
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::builder(catalog::NOT_FOUND).message(message).build()
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::builder(catalog::CONFLICT).message(message).build()
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::builder(catalog::INTERNAL_ERROR)
            .message(message)
            .build()
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn status(&self) -> u16 {
        self.code.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn error_id(&self) -> Uuid {
        self.error_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The direct cause, if any.
    pub fn cause(&self) -> Option<&SharedCause> {
        self.cause.as_ref()
    }

    /// Walk the cause chain, nearest first.
    pub fn cause_chain(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        std::iter::successors(std::error::Error::source(self), |err| err.source())
    }

    /// Single-line diagnostic for a logger.
    ///
    /// Format: `code=.. status=.. error_id=.. timestamp=.. message=".."` with a
    /// trailing `cause=".."` when a cause is attached.
    pub fn log_line(&self) -> String {
        let mut line = format!(
            "code={} status={} error_id={} timestamp={} message=\"{}\"",
            self.code.code(),
            self.status(),
            self.error_id,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            escape_line(&self.message),
        );
        if let Some(cause) = &self.cause {
            line.push_str(&format!(" cause=\"{}\"", escape_line(&cause.to_string())));
        }
        line
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for StructuredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Quote-safe, newline-free rendering for key="value" log fields.
pub(crate) fn escape_line(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
