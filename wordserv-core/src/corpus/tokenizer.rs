use std::mem;

use super::{is_letter, Book, Chapter, Paragraph};

/// Line content marking the start of a new chapter.
pub const CHAPTER_MARKER: &str = "[CHAPTER]";

/// Incremental book tokenizer fed one line at a time.
///
/// # Rules
/// - Lines are trimmed; blank lines separate paragraphs
/// - Any number of consecutive blank lines seal at most one paragraph
/// - A `[CHAPTER]` line seals the current chapter, unless it has no
///   paragraph yet
/// - Letters, and apostrophes following them, build words; any other
///   non-space character is a one-character symbol token
/// - Words never span lines
#[derive(Debug, Default)]
pub struct BookBuilder {
	/// Word being accumulated on the current line
	word: String,
	/// Tokens of the paragraph in progress
	tokens: Paragraph,
	/// Sealed paragraphs of the chapter in progress
	paragraphs: Chapter,
	/// Sealed chapters
	chapters: Vec<Chapter>,
	last_line_blank: bool,
}

impl BookBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Feeds the next line of the book, without its line terminator.
	pub fn push_line(&mut self, line: &str) {
		let line = line.trim();

		if line.is_empty() {
			self.last_line_blank = true;
			return;
		}
		if self.last_line_blank {
			self.seal_paragraph();
			self.last_line_blank = false;
		}

		if line == CHAPTER_MARKER {
			if self.paragraphs.is_empty() {
				return;
			}
			self.chapters.push(mem::take(&mut self.paragraphs));
			self.tokens.clear();
			return;
		}

		for c in line.chars() {
			if is_letter(c) || (c == '\'' && !self.word.is_empty()) {
				self.word.push(c);
				continue;
			}
			self.flush_word();
			if !c.is_whitespace() {
				self.tokens.push(c.to_string());
			}
		}
		self.flush_word();
	}

	/// Seals whatever is still in progress and returns the book.
	pub fn finish(mut self) -> Book {
		self.flush_word();
		self.seal_paragraph();
		if !self.paragraphs.is_empty() {
			self.chapters.push(self.paragraphs);
		}
		Book::new(self.chapters)
	}

	fn flush_word(&mut self) {
		if !self.word.is_empty() {
			self.tokens.push(mem::take(&mut self.word));
		}
	}

	fn seal_paragraph(&mut self) {
		if !self.tokens.is_empty() {
			self.paragraphs.push(mem::take(&mut self.tokens));
		}
	}
}

/// Tokenizes a whole text into a `Book`.
///
/// Both `\n` and `\r\n` line endings are accepted.
pub fn tokenize(text: &str) -> Book {
	let mut builder = BookBuilder::new();
	for line in text.lines() {
		builder.push_line(line);
	}
	builder.finish()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chapters(text: &str) -> Vec<Vec<Vec<String>>> {
		tokenize(text).chapters().to_vec()
	}

	#[test]
	fn plain_lines_make_one_chapter_with_one_paragraph() {
		let book = chapters("The first line\nand the second\nand a third.");
		assert_eq!(book.len(), 1);
		assert_eq!(book[0].len(), 1);
		assert_eq!(
			book[0][0],
			vec!["The", "first", "line", "and", "the", "second", "and", "a", "third", "."]
		);
	}

	#[test]
	fn splits_chapters_and_punctuation() {
		let book = chapters("Hello, world!\n\n[CHAPTER]\nIt works.");
		assert_eq!(
			book,
			vec![
				vec![vec!["Hello", ",", "world", "!"]],
				vec![vec!["It", "works", "."]],
			]
		);
	}

	#[test]
	fn leading_and_repeated_markers_are_ignored() {
		let book = chapters("[CHAPTER]\n[CHAPTER]\n\nOnce upon a time.\n\n[CHAPTER]\n[CHAPTER]\nThe end.");
		assert_eq!(book.len(), 2);
		assert_eq!(book[0], vec![vec!["Once", "upon", "a", "time", "."]]);
		assert_eq!(book[1], vec![vec!["The", "end", "."]]);
	}

	#[test]
	fn consecutive_blank_lines_seal_a_single_paragraph() {
		let book = chapters("First.\n\n\n   \n\t\nSecond.\n\n");
		assert_eq!(book, vec![vec![vec!["First", "."], vec!["Second", "."]]]);
	}

	#[test]
	fn apostrophes_stay_inside_words() {
		let book = chapters("don't stop");
		assert_eq!(book[0][0], vec!["don't", "stop"]);
	}

	#[test]
	fn isolated_apostrophe_is_a_symbol() {
		let book = chapters("rock ' roll 'tis");
		assert_eq!(book[0][0], vec!["rock", "'", "roll", "'", "tis"]);
	}

	#[test]
	fn apostrophe_after_letters_extends_the_word() {
		let book = chapters("the dogs' bones");
		assert_eq!(book[0][0], vec!["the", "dogs'", "bones"]);
	}

	#[test]
	fn words_do_not_span_lines() {
		let book = chapters("half\nway");
		assert_eq!(book[0][0], vec!["half", "way"]);
	}

	#[test]
	fn digits_and_quotes_are_symbols() {
		let book = chapters("\"Room 42\"");
		assert_eq!(book[0][0], vec!["\"", "Room", "4", "2", "\""]);
	}

	#[test]
	fn crlf_and_surrounding_whitespace_are_trimmed() {
		let book = chapters("  Hello \r\n\r\n\t[CHAPTER]  \r\nBye\r\n");
		assert_eq!(book, vec![vec![vec!["Hello"]], vec![vec!["Bye"]]]);
	}

	#[test]
	fn marker_without_blank_line_keeps_previous_lines_together() {
		// The current chapter has no sealed paragraph yet, so the marker is a no-op.
		let book = chapters("Alpha\n[CHAPTER]\nBeta");
		assert_eq!(book, vec![vec![vec!["Alpha", "Beta"]]]);
	}

	#[test]
	fn marker_discards_unsealed_tokens_of_a_started_chapter() {
		let book = chapters("One.\n\nTwo\n[CHAPTER]\nThree.");
		assert_eq!(book, vec![vec![vec!["One", "."]], vec![vec!["Three", "."]]]);
	}

	#[test]
	fn empty_input_has_no_chapters() {
		assert!(tokenize("").is_empty());
		assert!(tokenize("\n  \n\t\n").is_empty());
		assert!(tokenize("[CHAPTER]\n\n[CHAPTER]").is_empty());
	}

	#[test]
	fn unicode_letters_form_words() {
		let book = chapters("Straße, naïve — 東京");
		assert_eq!(book[0][0], vec!["Straße", ",", "naïve", "—", "東京"]);
	}

	#[test]
	fn letter_numerals_are_symbols() {
		let book = chapters("Chapter Ⅻ ends");
		assert_eq!(book[0][0], vec!["Chapter", "Ⅻ", "ends"]);
	}

	#[test]
	fn builder_accepts_lines_incrementally() {
		let mut builder = BookBuilder::new();
		for line in ["A tale.", "", "[CHAPTER]", "Another."] {
			builder.push_line(line);
		}
		let book = builder.finish();
		assert_eq!(book.chapters().len(), 2);
	}
}
