// Unit Tests for Validation Bundles
//
// UNIT UNDER TEST: ValidationErrors, Validate
//
// BUSINESS RESPONSIBILITY:
//   - Collects every violated field rather than stopping at the first
//   - Produces a field-to-message map where the last report for a field wins
//   - Stays a distinct type from structured errors
//
// TEST COVERAGE:
//   - Accumulation via add/check/with/merge/from_iter
//   - into_result for empty and non-empty bundles
//   - Detail map shape and duplicate-field handling
//   - Validate trait on a sample input type

use crate::violation::{FieldViolation, Validate, ValidationErrors};
use serde_json::json;

struct SignUp {
    email: &'static str,
    age: u32,
}

impl Validate for SignUp {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check(self.email.contains('@'), "email", "must be valid")
            .check(self.age >= 18, "age", "must be >= 18");
        errors.into_result()
    }
}

#[cfg(test)]
mod accumulation_tests {
    use super::*;

    #[test]
    fn test_check_records_only_failed_conditions() {
        // Arrange
        let mut errors = ValidationErrors::new();

        // Act
        errors
            .check(true, "name", "required")
            .check(false, "email", "must be valid");

        // Assert
        assert_eq!(
            errors.violations(),
            &[FieldViolation {
                field: "email".to_string(),
                message: "must be valid".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_bundle_is_ok() {
        assert_eq!(ValidationErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn test_non_empty_bundle_is_err() {
        let result = ValidationErrors::single("age", "must be >= 18").into_result();

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "validation failed for 1 field(s)");
    }

    #[test]
    fn test_merge_appends_nested_violations() {
        // Arrange
        let mut outer = ValidationErrors::single("name", "required");
        let nested: ValidationErrors = [("address.zip", "must be 5 digits")].into_iter().collect();

        // Act
        outer.merge(nested);

        // Assert
        assert_eq!(outer.len(), 2);
        assert_eq!(outer.violations()[1].field, "address.zip");
    }
}

#[cfg(test)]
mod detail_map_tests {
    use super::*;

    #[test]
    fn test_details_map_each_field_to_its_message() {
        // Arrange
        let errors = ValidationErrors::new()
            .with("email", "must be valid")
            .with("age", "must be >= 18");

        // Act
        let details = errors.to_details();

        // Assert
        assert_eq!(
            serde_json::Value::Object(details),
            json!({ "email": "must be valid", "age": "must be >= 18" })
        );
    }

    #[test]
    fn test_field_reported_twice_keeps_last_message() {
        let errors = ValidationErrors::new()
            .with("email", "required")
            .with("email", "must be valid");

        let details = errors.to_details();

        assert_eq!(details.len(), 1);
        assert_eq!(details["email"], json!("must be valid"));
        assert_eq!(errors.len(), 2, "the bundle itself keeps both reports");
    }

    #[test]
    fn test_summary_lists_violations_in_order() {
        let errors = ValidationErrors::new()
            .with("email", "must be valid")
            .with("age", "must be >= 18");

        assert_eq!(errors.summary(), "email: must be valid; age: must be >= 18");
    }
}

#[cfg(test)]
mod validate_trait_tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let form = SignUp {
            email: "a@b.c",
            age: 30,
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invalid_input_reports_every_field() {
        let form = SignUp {
            email: "nope",
            age: 12,
        };

        let errors = form.validate().unwrap_err();

        let fields: Vec<&str> = errors.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["email", "age"]);
    }
}
