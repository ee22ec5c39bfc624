//! Atomic file writer

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FolioResult;

use super::output_file::compute_hash;
use super::OutputFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Written,
    /// Existing file already had identical content
    Unchanged,
    /// Dry run; nothing touched
    Skipped,
}

/// Write content to a file atomically
///
/// Writes to a temp file in the same directory, then renames over the target.
pub fn atomic_write(path: &Path, content: &[u8]) -> FolioResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compute SHA-256 hash of content
pub fn hash_content(content: &str) -> String {
    compute_hash(content)
}

/// Compute SHA-256 hash of a file
pub fn hash_file(path: &Path) -> FolioResult<String> {
    let content = fs::read_to_string(path)?;
    Ok(compute_hash(&content))
}

/// Write unless the file on disk already hashes the same.
pub fn write_if_changed(file: &mut OutputFile, skip_unchanged: bool) -> FolioResult<WriteOutcome> {
    if skip_unchanged && file.path().exists() {
        let existing = hash_file(file.path())?;
        if existing == file.hash() {
            tracing::debug!(path = %file.path().display(), "output unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
    }

    atomic_write(file.path(), file.content().as_bytes())?;
    tracing::info!(path = %file.path().display(), bytes = file.len(), "wrote output");
    Ok(WriteOutcome::Written)
}
