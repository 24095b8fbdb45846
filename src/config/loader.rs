//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(path = ?path, routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_parse_minimal() {
        let config = parse_config(
            r#"
            [[routes]]
            pattern = "/cert/:id"
            handler = "cert_detail"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].pattern, "/cert/:id");
        assert_eq!(config.routes[0].name, None);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_observability() {
        let config = parse_config(
            r#"
            [observability]
            log_level = "debug"
            log_format = "json"

            [[routes]]
            pattern = "/"
            handler = "home"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = parse_config("").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: route table has no routes");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[routes]]\npattern = \"/a\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config(
            r#"
            [[routes]]
            pattern = "/a"
            handler = ""

            [[routes]]
            pattern = "/b/:"
            handler = "b"
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: route `/a` has an empty handler, \
             route `/b/:` has a parameter segment without a name"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/segment-router/routes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("segment-router-loader-{}.toml", std::process::id()));
        fs::write(&path, "[[routes]]\npattern = \"/\"\nhandler = \"home\"\nname = \"Home\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.routes[0].name.as_deref(), Some("Home"));

        fs::remove_file(&path).unwrap();
    }
}
