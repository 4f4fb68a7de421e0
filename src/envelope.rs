//! Wire-level response shapes.
//!
//! The transport boundary serializes these; the core never does. Field names are
//! the contract:
//!
//! ```json
//! { "success": false,
//!   "error": { "code": "common.not_found", "message": "Order 42 not found",
//!              "details": { "orderId": 42 } } }
//! ```

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Failure response. `success` is always `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(deserialize_with = "failure_flag")]
    success: bool,
    error: ErrorBody,
}

/// The `error` object of an [`ErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    code: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Map<String, Value>>,
}

impl ErrorEnvelope {
    /// Empty `details` are dropped so the field is omitted on the wire.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details: details.filter(|details| !details.is_empty()),
            },
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> &ErrorBody {
        &self.error
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }

    pub fn details(&self) -> Option<&Map<String, Value>> {
        self.error.details.as_ref()
    }
}

impl ErrorBody {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Map<String, Value>> {
        self.details.as_ref()
    }
}

// An error envelope never claims success.
fn failure_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    if bool::deserialize(deserializer)? {
        return Err(de::Error::invalid_value(Unexpected::Bool(true), &"false"));
    }
    Ok(false)
}

/// Sibling success response, `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
