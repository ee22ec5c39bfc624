//! OutputFile - a rendered document ready to be written

use sha2::{Digest, Sha256};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// Where this file should be written
    path: PathBuf,
    content: String,
    hash: Option<String>,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            hash: None,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Compute and cache the content hash (SHA256)
    pub fn hash(&mut self) -> &str {
        let content = &self.content;
        self.hash.get_or_insert_with(|| compute_hash(content))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

pub(super) fn compute_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}
