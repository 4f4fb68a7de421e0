//! Field-keyed validation failures.
//!
//! [`ValidationErrors`] is what an input validator returns: one entry per
//! offending field. It is deliberately a different type from
//! [`StructuredError`](crate::StructuredError) so the translator can give it the
//! per-field envelope shape.
//!
//! ```rust
//! use service_errors::{Validate, ValidationErrors};
//!
//! struct SignUp {
//!     email: String,
//!     age: u32,
//! }
//!
//! impl Validate for SignUp {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors
//!             .check(self.email.contains('@'), "email", "must be valid")
//!             .check(self.age >= 18, "age", "must be >= 18");
//!         errors.into_result()
//!     }
//! }
//!
//! let form = SignUp { email: "nope".into(), age: 12 };
//! assert_eq!(form.validate().unwrap_err().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Ordered bundle of field violations.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("validation failed for {} field(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle holding a single violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new().with(field, message)
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Record a violation on `field` unless `condition` holds.
    pub fn check(
        &mut self,
        condition: bool,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        if !condition {
            self.add(field, message);
        }
        self
    }

    /// Fold another bundle in, e.g. from a nested validator.
    pub fn merge(&mut self, other: ValidationErrors) -> &mut Self {
        self.violations.extend(other.violations);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Field name to message. A field reported twice keeps its last message.
    pub fn to_details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        for violation in &self.violations {
            details.insert(
                violation.field.clone(),
                Value::String(violation.message.clone()),
            );
        }
        details
    }

    /// `field: message; field: message`, for log output.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<F, M> FromIterator<(F, M)> for ValidationErrors
where
    F: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

/// Types that can check their own fields.
pub trait Validate {
    /// Returns every violated field at once rather than stopping at the first.
    fn validate(&self) -> Result<(), ValidationErrors>;
}
