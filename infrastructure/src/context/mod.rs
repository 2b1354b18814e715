//! Context loading infrastructure
//!
//! Reads context documents from the local file system for the CLI. The
//! library entry points take documents directly; this is only a
//! convenience for callers without their own retrieval system.

mod loader;

pub use loader::{DocumentLoadError, LocalDocumentLoader};
