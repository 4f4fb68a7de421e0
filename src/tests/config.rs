// Unit Tests for Translator Configuration
//
// UNIT UNDER TEST: TranslatorConfig
//
// BUSINESS RESPONSIBILITY:
//   - Supplies the fixed messages and fallback codes used for validation
//     bundles and unrecognized errors
//   - Refuses configurations that would give the wrong status family
//
// TEST COVERAGE:
//   - Defaults match the built-in catalog
//   - Empty message rejection
//   - Family checks on the fallback codes

use crate::catalog::{self, ErrorCode, StatusFamily};
use crate::config::TranslatorConfig;
use crate::error::ConfigError;
use crate::tests::helpers::{LEDGER_UNAVAILABLE, OUT_OF_STOCK};
use crate::translate::Translator;

#[cfg(test)]
mod translator_config_tests {
    use super::*;

    #[test]
    fn test_defaults_use_builtin_codes_and_messages() {
        // Act
        let config = TranslatorConfig::default();

        // Assert
        assert_eq!(config.validation_code, catalog::VALIDATION_FAILED);
        assert_eq!(config.internal_code, catalog::INTERNAL_ERROR);
        assert_eq!(config.validation_message, "Validation failed");
        assert_eq!(config.internal_message, "An unexpected error occurred");
        assert!(config.expose_error_id);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_messages_are_rejected() {
        // Arrange
        let config = TranslatorConfig {
            internal_message: "   ".to_string(),
            ..TranslatorConfig::default()
        };

        // Act
        let result = config.validate();

        // Assert
        assert_eq!(
            result,
            Err(ConfigError::EmptyMessage {
                field: "internal_message"
            })
        );
    }

    #[test]
    fn test_internal_code_must_be_server_family() {
        // Arrange
        let config = TranslatorConfig {
            internal_code: OUT_OF_STOCK,
            ..TranslatorConfig::default()
        };

        // Act
        let result = Translator::new(config);

        // Assert
        assert!(matches!(
            result,
            Err(ConfigError::WrongFamily {
                field: "internal_code",
                status: 409,
                expected: StatusFamily::Server,
                ..
            })
        ));
    }

    #[test]
    fn test_validation_code_must_be_client_family() {
        let config = TranslatorConfig {
            validation_code: LEDGER_UNAVAILABLE,
            ..TranslatorConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::WrongFamily {
                field: "validation_code",
                ..
            })
        ));
    }

    #[test]
    fn test_non_error_status_is_rejected_even_if_family_matches() {
        let config = TranslatorConfig {
            validation_code: ErrorCode::new("common.ok", "ok", 200),
            ..TranslatorConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_domain_codes_are_accepted() {
        let config = TranslatorConfig {
            internal_code: LEDGER_UNAVAILABLE,
            internal_message: "Please try again later".to_string(),
            ..TranslatorConfig::default()
        };

        let translator = Translator::new(config).unwrap();

        assert_eq!(translator.config().internal_code.status(), 503);
    }
}
