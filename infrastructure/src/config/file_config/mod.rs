//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod providers;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::FileProviderConfig;

use examgen_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("provider: {0}")]
    InvalidProvider(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hosted model provider settings
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.provider.model.as_str().trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.provider.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        if let Err(e) = self.provider.check() {
            issues.push(e.into());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examgen_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
api_key_env = "EXAM_KEY"
base_url = "https://api.groq.com/openai/v1"
model = "llama-3.3-70b-versatile"
temperature = 0.1

[output]
format = "json"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.api_key_env, "EXAM_KEY");
        assert_eq!(config.provider.model, Model::Llama33_70bVersatile);
        assert_eq!(config.provider.temperature, 0.1);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[provider]\nmodel = \"gemma2-9b-it\"\n").unwrap();
        assert_eq!(config.provider.model, Model::Gemma2_9b);
        assert_eq!(config.provider.temperature, 0.2);
        assert_eq!(config.provider.api_key_env, "GROQ_API_KEY");
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[provider]
api_key_env = ""
model = ""
base_url = "http://localhost:11434/v1"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(matches!(issues[0], ConfigValidationError::EmptyModelName));
        assert!(matches!(issues[1], ConfigValidationError::EmptyApiKeyEnv));
        assert!(matches!(
            issues[2],
            ConfigValidationError::InvalidProvider(DomainError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_validate_temperature_range() {
        let config: FileConfig = toml::from_str("[provider]\ntemperature = -1.0\n").unwrap();
        let issues = config.validate();
        assert!(matches!(
            issues.as_slice(),
            [ConfigValidationError::InvalidProvider(
                DomainError::InvalidTemperature(_)
            )]
        ));
    }
}
