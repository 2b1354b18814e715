//! Domain layer for examgen
//!
//! This crate contains the value objects and the prompt template.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Context documents**: retrieved text passed in by the caller, joined
//!   into the prompt's context section
//! - **Marks**: a free-form label telling the model how long and how
//!   structured the answer should be
//! - **Provider configuration**: model, temperature, credential and a
//!   cloud-only endpoint

pub mod answer;
pub mod config;
pub mod context;
pub mod core;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use answer::{Answer, TokenUsage};
pub use config::OutputFormat;
pub use context::{ContextDocument, PageContent};
pub use self::core::{credential::Credential, error::DomainError, model::Model};
pub use prompt::{ExamPromptTemplate, NO_CONTEXT_FALLBACK};
pub use providers::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TEMPERATURE, ProviderConfig};
