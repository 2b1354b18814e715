//! Groq chat completions provider
//!
//! Talks to the OpenAI-compatible `/chat/completions` endpoint with a bearer
//! API key. One request per session send; no streaming.

mod gateway;
mod session;
mod types;

pub use gateway::GroqGateway;
pub use session::GroqSession;
