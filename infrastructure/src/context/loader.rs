//! Local file system document loader
//!
//! Each file becomes one [`ContextDocument`], in the order given.

use examgen_domain::ContextDocument;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
#[error("Failed to read context document {}: {}", .path.display(), .source)]
pub struct DocumentLoadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Loads context documents from local files.
#[derive(Debug, Clone, Default)]
pub struct LocalDocumentLoader;

impl LocalDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read every path into a document, failing on the first unreadable file.
    pub fn load<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<Vec<ContextDocument>, DocumentLoadError> {
        paths.iter().map(|path| self.load_one(path.as_ref())).collect()
    }

    fn load_one(&self, path: &Path) -> Result<ContextDocument, DocumentLoadError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentLoadError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded context document {} ({} bytes)", path.display(), content.len());
        Ok(ContextDocument::new(content))
    }
}
