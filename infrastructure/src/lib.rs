//! Infrastructure layer for examgen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod context;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat,
    FileProviderConfig,
};
pub use context::{DocumentLoadError, LocalDocumentLoader};
pub use logging::JsonlConversationLogger;
pub use providers::{GroqGateway, GroqSession};
