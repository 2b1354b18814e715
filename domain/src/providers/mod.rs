//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::core::credential::Credential;
use crate::core::error::DomainError;
use crate::core::model::Model;
use url::{Host, Url};

/// Default hosted endpoint (OpenAI-compatible chat completions API).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default sampling temperature. Kept low for exam-style answers.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Hosted model provider configuration.
///
/// The credential is optional here so that a missing key surfaces as a
/// configuration error at client construction, not at config load.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Model to request.
    pub model: Model,
    /// Sampling temperature (0.0 to 2.0).
    pub temperature: f32,
    /// API key, if one was resolved.
    pub credential: Option<Credential>,
    /// Environment variable the key is expected in (used in error messages).
    pub api_key_env: String,
    /// Base URL of the hosted API.
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            credential: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check temperature range and endpoint policy.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(DomainError::InvalidTemperature(self.temperature));
        }
        validate_endpoint(&self.base_url)
    }
}

/// Reject endpoints that are not https or that point at a local server.
///
/// The client must never fall back to a loopback host. Hosts are compared
/// after URL parsing, so numeric, expanded and IPv4-mapped spellings of a
/// loopback address are caught too.
pub fn validate_endpoint(base_url: &str) -> Result<(), DomainError> {
    let url = Url::parse(base_url).map_err(|e| {
        DomainError::InvalidEndpoint(format!("{} is not a valid URL: {}", base_url, e))
    })?;

    if url.scheme() != "https" {
        return Err(DomainError::InvalidEndpoint(format!(
            "{} is not an https URL",
            base_url
        )));
    }

    let Some(host) = url.host() else {
        return Err(DomainError::InvalidEndpoint(format!(
            "{} has no host",
            base_url
        )));
    };

    if is_local_host(&host) {
        return Err(DomainError::InvalidEndpoint(format!(
            "{} points at a local server",
            base_url
        )));
    }

    Ok(())
}

fn is_local_host(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(domain) => {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Host::Ipv4(addr) => addr.is_loopback() || addr.is_unspecified(),
        Host::Ipv6(addr) => {
            addr.is_loopback()
                || addr.is_unspecified()
                || addr
                    .to_ipv4_mapped()
                    .is_some_and(|v4| v4.is_loopback() || v4.is_unspecified())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.model, Model::Llama31_8bInstant);
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.api_key_env, "GROQ_API_KEY");
        assert!(config.credential.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cloud_endpoint_accepted() {
        assert!(validate_endpoint("https://api.groq.com/openai/v1").is_ok());
        assert!(validate_endpoint("https://api.groq.com:443").is_ok());
    }

    #[test]
    fn test_loopback_endpoints_rejected() {
        for url in [
            "https://localhost:11434/v1",
            "https://127.0.0.1/v1",
            "https://[::1]:8080",
            "https://0.0.0.0",
            "https://LOCALHOST",
            "https://localhost./v1",
            "https://api.localhost/v1",
            "https://[0:0:0:0:0:0:0:1]/v1",
            "https://[::ffff:127.0.0.1]/v1",
            "https://2130706433/v1",
            "https://0x7f000001/v1",
            "https://127.1/v1",
        ] {
            assert!(
                matches!(validate_endpoint(url), Err(DomainError::InvalidEndpoint(_))),
                "{} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_plain_http_rejected() {
        assert!(validate_endpoint("http://api.groq.com/openai/v1").is_err());
        assert!(validate_endpoint("https://").is_err());
        assert!(validate_endpoint("api.groq.com/openai/v1").is_err());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let config = ProviderConfig::default().with_temperature(3.5);
        assert!(matches!(
            config.validate(),
            Err(DomainError::InvalidTemperature(_))
        ));
    }
}
