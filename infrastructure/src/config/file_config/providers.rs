//! Provider configuration from TOML (`[provider]` section)

use examgen_domain::core::error::DomainError;
use examgen_domain::{
    Credential, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TEMPERATURE, Model, ProviderConfig,
};
use serde::{Deserialize, Serialize};

/// Hosted model provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API. Must be https and not local.
    pub base_url: String,
    /// Model name (default: "llama-3.1-8b-instant").
    pub model: Model,
    /// Sampling temperature (default: 0.2).
    pub temperature: f32,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the credential from `api_key`, then from the process environment.
    pub fn resolve_credential(&self) -> Option<Credential> {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the credential using a custom variable lookup.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> Option<Credential>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .as_deref()
            .and_then(Credential::try_new)
            .or_else(|| lookup(&self.api_key_env).and_then(Credential::try_new))
    }

    /// Build the domain provider configuration with the given credential.
    pub fn to_provider_config(&self, credential: Option<Credential>) -> ProviderConfig {
        ProviderConfig {
            model: self.model.clone(),
            temperature: self.temperature,
            credential,
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
        }
    }

    pub(super) fn check(&self) -> Result<(), DomainError> {
        self.to_provider_config(None).validate()
    }
}
