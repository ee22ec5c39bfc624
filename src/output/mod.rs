//! Output artifacts and writing them to disk

mod output_file;
mod writer;

pub use output_file::OutputFile;
pub use writer::{atomic_write, hash_content, hash_file, write_if_changed, WriteOutcome};
