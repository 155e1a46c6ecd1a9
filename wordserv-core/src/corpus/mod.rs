//! In-memory book model.
//!
//! A `Corpus` is an ordered list of `Book`s, each book an ordered list of
//! chapters, each chapter a list of paragraphs, each paragraph a list of
//! tokens. The nesting serializes directly to the JSON lists served by the
//! API.

use serde::Serialize;

/// Line-based tokenizer building a `Book` from raw text.
pub mod tokenizer;

/// Directory loader with parallel tokenization.
mod loader;

pub use tokenizer::{tokenize, BookBuilder, CHAPTER_MARKER};

use crate::error::{CorpusError, Result};

/// A word (letters with optional apostrophes) or a single-character symbol.
pub type Token = String;

/// Ordered, non-empty list of tokens.
pub type Paragraph = Vec<Token>;

/// Ordered, non-empty list of paragraphs.
pub type Chapter = Vec<Paragraph>;

/// Returns `true` if the character can start or extend a word.
///
/// Alphabetic characters except letter-like numerals (`Ⅻ`), which stay
/// symbols. Combining vowel signs of alphabetic scripts count as letters.
pub fn is_letter(c: char) -> bool {
	c.is_alphabetic() && !c.is_numeric()
}

/// Returns `true` if the token is a word rather than a symbol.
///
/// Words always start with a letter; symbols never do.
pub fn is_word(token: &str) -> bool {
	token.chars().next().is_some_and(is_letter)
}

/// A single tokenized book.
///
/// # Invariants
/// - Every chapter holds at least one paragraph
/// - Every paragraph holds at least one token
///
/// A book may hold zero chapters when its source had no content; such
/// books never make it into a `Corpus`.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Book {
	chapters: Vec<Chapter>,
}

impl Book {
	pub(crate) fn new(chapters: Vec<Chapter>) -> Self {
		Self { chapters }
	}

	pub fn chapters(&self) -> &[Chapter] {
		&self.chapters
	}

	pub fn is_empty(&self) -> bool {
		self.chapters.is_empty()
	}

	/// Number of word tokens in each chapter, symbols excluded.
	pub fn word_counts(&self) -> Vec<usize> {
		self.chapters
			.iter()
			.map(|chapter| chapter.iter().flatten().filter(|token| is_word(token)).count())
			.collect()
	}
}

/// Every book available to the server.
///
/// Built once at startup and never mutated afterwards.
///
/// # Invariants
/// - Holds at least one book
/// - No book is empty
#[derive(Clone, Debug)]
pub struct Corpus {
	books: Vec<Book>,
}

impl Corpus {
	/// Builds a corpus from already tokenized books.
	///
	/// Empty books are dropped.
	///
	/// # Errors
	/// Returns `CorpusError::Empty` if no book is left.
	pub fn new(books: Vec<Book>) -> Result<Self> {
		let books: Vec<Book> = books.into_iter().filter(|book| !book.is_empty()).collect();
		if books.is_empty() {
			return Err(CorpusError::Empty);
		}
		Ok(Self { books })
	}

	/// Tokenizes each text as a separate book.
	pub fn from_texts<I, S>(texts: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::new(texts.into_iter().map(|text| tokenize(text.as_ref())).collect())
	}

	pub fn books(&self) -> &[Book] {
		&self.books
	}

	pub fn len(&self) -> usize {
		self.books.len()
	}

	/// Returns `true` if the corpus holds no book.
	pub fn is_empty(&self) -> bool {
		self.books.is_empty()
	}
}

/// Per-chapter word counts for every book of a corpus.
///
/// Entry `i` describes book `i`, with one count per chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCountIndex {
	counts: Vec<Vec<usize>>,
}

impl WordCountIndex {
	pub fn build(corpus: &Corpus) -> Self {
		Self {
			counts: corpus.books().iter().map(Book::word_counts).collect(),
		}
	}

	/// Word counts of each chapter of book `book`.
	///
	/// # Panics
	/// Panics if `book` is out of range for the indexed corpus.
	pub fn book(&self, book: usize) -> &[usize] {
		&self.counts[book]
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn is_word_checks_first_character() {
		assert!(is_word("don't"));
		assert!(is_word("Éclair"));
		assert!(!is_word(","));
		assert!(!is_word("'"));
		assert!(!is_word("7"));
		assert!(!is_word(""));
		assert!(!is_word("Ⅻ"));
	}

	#[test]
	fn is_letter_excludes_letter_numerals() {
		assert!(is_letter('a'));
		assert!(is_letter('東'));
		assert!(!is_letter('Ⅻ'));
		assert!(!is_letter('ⅰ'));
		assert!(!is_letter('7'));
	}

	#[test]
	fn corpus_drops_empty_books() {
		let corpus = Corpus::from_texts(["", "   \n\n", "One line."]).unwrap();
		assert_eq!(corpus.len(), 1);
		assert_eq!(corpus.books()[0].chapters(), &[vec![vec!["One", "line", "."]]]);
	}

	#[test]
	fn corpus_without_content_is_an_error() {
		assert!(matches!(Corpus::from_texts(["", "\n[CHAPTER]\n"]), Err(CorpusError::Empty)));
		assert!(matches!(Corpus::new(Vec::new()), Err(CorpusError::Empty)));
	}

	#[test]
	fn word_count_index_is_aligned_with_books() {
		let corpus = Corpus::from_texts([
			"Hello, world!\n\n[CHAPTER]\nIt works.",
			"One two three.\n\nFour -- five.",
		])
		.unwrap();
		let index = WordCountIndex::build(&corpus);

		assert_eq!(index.len(), corpus.len());
		assert_eq!(index.book(0), &[2, 2]);
		assert_eq!(index.book(1), &[5]);
		for (i, book) in corpus.books().iter().enumerate() {
			assert_eq!(index.book(i).len(), book.chapters().len());
		}
	}

	#[test]
	fn book_serializes_as_nested_lists() {
		let book = tokenize("Hi.\n\n[CHAPTER]\nBye");
		let json = serde_json::to_string(&book).unwrap();
		assert_eq!(json, r#"[[["Hi","."]],[["Bye"]]]"#);
	}
}
