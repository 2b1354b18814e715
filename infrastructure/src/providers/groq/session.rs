//! Groq LLM session implementation
//!
//! Wraps one `reqwest::Client` and sends each prompt as a single
//! chat completions request.

use super::types::{self, ChatRequest};
use async_trait::async_trait;
use examgen_application::ports::llm_gateway::{GatewayError, LlmSession};
use examgen_domain::{Answer, Credential, Model};
use tracing::debug;

pub struct GroqSession {
    client: reqwest::Client,
    endpoint: String,
    credential: Credential,
    model: Model,
    temperature: f32,
}

impl GroqSession {
    pub fn new(
        client: reqwest::Client,
        endpoint: String,
        credential: Credential,
        model: Model,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            endpoint,
            credential,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl LlmSession for GroqSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<Answer, GatewayError> {
        let request =
            ChatRequest::single_user_message(self.model.as_str(), self.temperature, content);

        debug!(
            model = %self.model,
            bytes = content.len(),
            "Calling chat completions API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| types::convert_transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| types::convert_transport_error(&e))?;

        if !status.is_success() {
            return Err(types::convert_status_error(status.as_u16(), &body));
        }

        types::convert_response(&body, &self.model)
    }
}
