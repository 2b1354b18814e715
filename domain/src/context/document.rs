//! Context document value object

use serde::{Deserialize, Serialize};

/// Anything that exposes a single text field usable as answer context.
///
/// Retrieval backends can implement this for their own document type
/// instead of converting into [`ContextDocument`].
pub trait PageContent {
    fn page_content(&self) -> &str;
}

/// A retrieved unit of text supplied as grounding for an answer (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextDocument {
    pub page_content: String,
}

impl ContextDocument {
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
        }
    }
}

impl PageContent for ContextDocument {
    fn page_content(&self) -> &str {
        &self.page_content
    }
}

impl PageContent for String {
    fn page_content(&self) -> &str {
        self
    }
}

impl PageContent for str {
    fn page_content(&self) -> &str {
        self
    }
}

impl<T: PageContent + ?Sized> PageContent for &T {
    fn page_content(&self) -> &str {
        (**self).page_content()
    }
}

impl From<&str> for ContextDocument {
    fn from(s: &str) -> Self {
        ContextDocument::new(s)
    }
}

impl From<String> for ContextDocument {
    fn from(s: String) -> Self {
        ContextDocument::new(s)
    }
}
