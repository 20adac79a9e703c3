// Unit Tests for Logger Configuration
//
// UNIT UNDER TEST: LoggerConfig, LogFormat
//
// BUSINESS RESPONSIBILITY:
//   - Describes a named logger and how its output is rendered
//   - Rejects configurations that would produce anonymous log lines
//   - Lets LOG_LEVEL, LOG_FORMAT and NO_COLOR adjust output without code changes
//
// TEST COVERAGE:
//   - Defaults and builder setters
//   - Name validation
//   - Environment overrides, including invalid values
//   - Serde defaults for partial configuration files

use crate::config::{LogFormat, LoggerConfig, LOG_FORMAT_ENV, LOG_LEVEL_ENV, NO_COLOR_ENV};
use crate::error::LoggerError;
use crate::level::LogLevel;

fn clear_logger_env() {
    std::env::remove_var(LOG_LEVEL_ENV);
    std::env::remove_var(LOG_FORMAT_ENV);
    std::env::remove_var(NO_COLOR_ENV);
}

#[cfg(test)]
mod logger_config_tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        // Arrange & Act
        let config = LoggerConfig::default();

        // Assert
        assert_eq!(config.name, "app");
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.ansi, "Colors should be on unless disabled");
        assert!(!config.with_target);
    }

    #[test]
    fn test_builder_setters_apply() {
        let config = LoggerConfig::new("Mastra CLI")
            .with_level(LogLevel::Debug)
            .with_format(LogFormat::Json)
            .with_ansi(false)
            .with_target(true);

        assert_eq!(config.name, "Mastra CLI");
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.ansi);
        assert!(config.with_target);
    }

    #[test]
    fn test_validate_accepts_named_config() {
        assert!(LoggerConfig::new("Mastra CLI").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        // Arrange
        let config = LoggerConfig::new("   ");

        // Act
        let result = config.validate();

        // Assert
        assert!(matches!(
            result,
            Err(LoggerError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LoggerError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_config_uses_defaults() {
        // Arrange
        let json = r#"{ "name": "Mastra CLI", "level": "debug" }"#;

        // Act
        let config: LoggerConfig = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(config.name, "Mastra CLI");
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.ansi);
    }
}

// UNIT UNDER TEST: LoggerConfig::apply_env / LoggerConfig::from_env
//
// BUSINESS RESPONSIBILITY:
//   - Lets operators change verbosity and format per invocation
//   - Fails loudly on typos instead of silently logging at the wrong level
//
// TEST COVERAGE:
//   - Unset variables keep configured values
//   - Each variable overrides its field
//   - Invalid values produce typed errors

#[cfg(test)]
mod logger_config_env_tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_apply_env_without_variables_keeps_config() {
        // Arrange
        clear_logger_env();
        let config = LoggerConfig::new("Mastra CLI").with_level(LogLevel::Debug);

        // Act
        let result = config.clone().apply_env().unwrap();

        // Assert
        assert_eq!(result, config);
    }

    #[test]
    #[serial]
    fn test_apply_env_overrides_level_format_and_color() {
        // Arrange
        clear_logger_env();
        std::env::set_var(LOG_LEVEL_ENV, "warn");
        std::env::set_var(LOG_FORMAT_ENV, "json");
        std::env::set_var(NO_COLOR_ENV, "1");

        // Act
        let result = LoggerConfig::from_env("Mastra CLI");
        clear_logger_env();

        // Assert
        let config = result.unwrap();
        assert_eq!(config.name, "Mastra CLI");
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.ansi);
    }

    #[test]
    #[serial]
    fn test_apply_env_rejects_invalid_level() {
        clear_logger_env();
        std::env::set_var(LOG_LEVEL_ENV, "loud");

        let result = LoggerConfig::from_env("Mastra CLI");
        clear_logger_env();

        assert_eq!(
            result.unwrap_err(),
            LoggerError::InvalidLevel {
                value: "loud".to_string()
            }
        );
    }

    #[test]
    #[serial]
    fn test_apply_env_rejects_invalid_format() {
        clear_logger_env();
        std::env::set_var(LOG_FORMAT_ENV, "xml");

        let result = LoggerConfig::from_env("Mastra CLI");
        clear_logger_env();

        assert!(matches!(result, Err(LoggerError::InvalidFormat { .. })));
    }
}
