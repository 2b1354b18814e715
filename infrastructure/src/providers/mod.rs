//! Hosted model provider adapters
//!
//! Each provider implements the application's `LlmGateway` port.

pub mod groq;

pub use groq::{GroqGateway, GroqSession};
