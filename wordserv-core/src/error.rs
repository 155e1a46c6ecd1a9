use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a corpus.
///
/// Sampling itself never fails, so every variant belongs to startup.
#[derive(Debug, Error)]
pub enum CorpusError {
	#[error("cannot list book directory '{}': {source}", .path.display())]
	ListDirectory { path: PathBuf, source: io::Error },

	#[error("cannot read book '{}': {source}", .path.display())]
	ReadBook { path: PathBuf, source: io::Error },

	#[error("corpus contains no book with readable content")]
	Empty,

	#[error("tokenizer worker stopped before finishing its books")]
	Worker,
}

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
