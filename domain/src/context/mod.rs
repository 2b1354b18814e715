//! Context domain
//!
//! Context documents are produced by an external retrieval system; this
//! crate only reads their text.

mod document;

pub use document::{ContextDocument, PageContent};
