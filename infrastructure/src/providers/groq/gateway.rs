//! Groq gateway (client factory)
//!
//! Implements `LlmGateway` by building a fresh [`GroqSession`] per call from
//! an explicitly supplied [`ProviderConfig`].

use super::session::GroqSession;
use async_trait::async_trait;
use examgen_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use examgen_domain::{Model, ProviderConfig};
use tracing::debug;

pub struct GroqGateway {
    config: ProviderConfig,
}

impl GroqGateway {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmGateway for GroqGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        let credential = self.config.credential.clone().ok_or_else(|| {
            GatewayError::NotConfigured(format!(
                "{} not found. Set it in the environment or in the config file.",
                self.config.api_key_env
            ))
        })?;

        self.config
            .validate()
            .map_err(|e| GatewayError::NotConfigured(e.to_string()))?;

        let client = reqwest::Client::builder().build().map_err(|e| {
            GatewayError::NotConfigured(format!("Failed to build HTTP client: {}", e))
        })?;

        let endpoint = self.chat_completions_url();
        debug!(model = %model, endpoint = %endpoint, "Created Groq session");

        Ok(Box::new(GroqSession::new(
            client,
            endpoint,
            credential,
            model.clone(),
            self.config.temperature,
        )))
    }

    fn default_model(&self) -> &Model {
        &self.config.model
    }
}
