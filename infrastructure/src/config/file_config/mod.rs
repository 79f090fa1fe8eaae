//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;

pub use gemini::FileGeminiConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation endpoint settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        self.gemini.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartmend_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
base_url = "http://localhost:8080/v1beta"
model = "gemini-2.5-flash"
api_key_env = "MY_GEMINI_KEY"

[output]
format = "summary"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.base_url, "http://localhost:8080/v1beta");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-pro"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        // Defaults should apply
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }
}
