//! Random literary excerpts from a pre-loaded corpus.
//!
//! This crate provides the text model behind the words API:
//! - A tokenizer turning plain-text books into chapters, paragraphs and tokens
//! - An immutable in-memory corpus loaded once from a directory
//! - Samplers returning contiguous chapter, paragraph or word runs
//!
//! Everything is read-only once built, so a `Sampler` can be shared
//! between threads without locking.

/// Books, chapters, paragraphs and tokens, plus the tokenizer and the
/// directory loader.
pub mod corpus;

/// Chapter, paragraph and word run selection.
pub mod sampler;

/// Error type for corpus loading.
pub mod error;

/// File system helpers used by the loader.
///
/// Not exposed
pub(crate) mod io;

pub use corpus::{Book, Chapter, Corpus, Paragraph, Token, WordCountIndex};
pub use error::{CorpusError, Result};
pub use sampler::{Limits, Sampler};
