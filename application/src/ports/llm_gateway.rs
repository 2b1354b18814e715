//! LLM Gateway port
//!
//! Defines the interface for constructing hosted-model clients. A gateway is
//! the client factory; each [`LlmSession`] it returns is one configured
//! client.

use async_trait::async_trait;
use examgen_domain::{Answer, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Raised while constructing a session, before any network attempt.
    #[error("{0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    /// Check if this error was raised before any network attempt
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::NotConfigured(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer obtains hosted-model clients.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Construct a fresh session bound to the given model.
    ///
    /// Must not touch the network.
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Model used when the caller does not pick one
    fn default_model(&self) -> &Model;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a single user message and wait for the full response
    async fn send(&self, content: &str) -> Result<Answer, GatewayError>;
}
