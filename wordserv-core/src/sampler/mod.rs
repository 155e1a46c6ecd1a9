//! Random excerpt selection.
//!
//! A `Sampler` owns the corpus, its word count index and the configured
//! ceilings. Each request picks a book uniformly at random and returns a
//! contiguous run of chapters, paragraphs or tokens borrowed from it.

use rand::Rng;

use crate::corpus::{is_word, Book, Chapter, Corpus, Paragraph, WordCountIndex};

/// Random window and start bound helpers shared by the samplers.
pub mod window;

use window::{random_start, random_window};

/// Server-side ceilings applied to every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
	pub max_words: usize,
	pub max_paragraphs: usize,
	pub max_chapters: usize,
}

impl Limits {
	pub fn new(max_words: usize, max_paragraphs: usize, max_chapters: usize) -> Self {
		Self { max_words, max_paragraphs, max_chapters }
	}
}

impl Default for Limits {
	fn default() -> Self {
		Self { max_words: 5000, max_paragraphs: 50, max_chapters: 3 }
	}
}

/// Excerpt sampler over an immutable corpus.
///
/// # Responsibilities
/// - Clamp requested counts against `Limits`
/// - Pick a random book, then a random start position inside it
/// - Walk forward until the effective count is reached or the book ends
///
/// # Notes
/// - Results borrow from the corpus, nothing is copied
/// - Each `select_*` method has a `select_*_with` variant taking the
///   random generator; the plain variant uses the thread-local one
/// - Running out of material yields a short result, never an error
#[derive(Debug)]
pub struct Sampler {
	corpus: Corpus,
	word_counts: WordCountIndex,
	limits: Limits,
}

impl Sampler {
	/// Builds the word count index and takes ownership of the corpus.
	pub fn new(corpus: Corpus, limits: Limits) -> Self {
		let word_counts = WordCountIndex::build(&corpus);
		Self { corpus, word_counts, limits }
	}

	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	pub fn limits(&self) -> Limits {
		self.limits
	}

	pub fn select_chapters(&self, count: usize) -> &[Chapter] {
		self.select_chapters_with(&mut rand::rng(), count)
	}

	pub fn select_paragraphs(&self, count: usize) -> Vec<&Paragraph> {
		self.select_paragraphs_with(&mut rand::rng(), count)
	}

	pub fn select_words(&self, count: usize) -> Vec<&str> {
		self.select_words_with(&mut rand::rng(), count)
	}

	/// Returns a contiguous run of whole chapters.
	///
	/// The run length is `min(count, max_chapters, chapters in book)`.
	pub fn select_chapters_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> &[Chapter] {
		let chapters = self.pick_book(rng).1.chapters();
		let window = random_window(rng, chapters.len(), count.min(self.limits.max_chapters));
		&chapters[window]
	}

	/// Returns up to `min(count, max_paragraphs)` consecutive paragraphs.
	///
	/// The run may cross chapter boundaries; chapters are not kept in the
	/// result.
	pub fn select_paragraphs_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&Paragraph> {
		let target = count.min(self.limits.max_paragraphs);
		if target == 0 {
			return Vec::new();
		}

		let chapters = self.pick_book(rng).1.chapters();
		let chapter = random_start(rng, chapters.iter().map(Vec::len), target);
		let paragraph = rng.random_range(0..chapters[chapter].len());

		chapters[chapter..]
			.iter()
			.flatten()
			.skip(paragraph)
			.take(target)
			.collect()
	}

	/// Returns a run of tokens holding up to `min(count, max_words)` words.
	///
	/// Symbols met along the way are part of the run but are not counted.
	/// The run ends right after the last counted word, or at the end of
	/// the book.
	pub fn select_words_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<&str> {
		let target = count.min(self.limits.max_words);
		if target == 0 {
			return Vec::new();
		}

		let (index, book) = self.pick_book(rng);
		let chapters = book.chapters();
		let chapter = random_start(rng, self.word_counts.book(index).iter().copied(), target);
		let paragraph = rng.random_range(0..chapters[chapter].len());
		let position = rng.random_range(0..chapters[chapter][paragraph].len());

		let mut tokens = Vec::new();
		let mut words = 0;
		let walk = chapters[chapter..]
			.iter()
			.flatten()
			.skip(paragraph)
			.flatten()
			.skip(position);
		for token in walk {
			tokens.push(token.as_str());
			if is_word(token) {
				words += 1;
				if words >= target {
					break;
				}
			}
		}
		tokens
	}

	fn pick_book<R: Rng + ?Sized>(&self, rng: &mut R) -> (usize, &Book) {
		let index = rng.random_range(0..self.corpus.len());
		(index, &self.corpus.books()[index])
	}
}
