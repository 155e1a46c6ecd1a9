use std::path::PathBuf;

use clap::Parser;
use wordserv_core::Limits;

/// Server settings, read from flags or `WORDSERV_*` environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "wordserv", about = "Serves random excerpts of plain-text books over HTTP")]
pub struct Config {
	/// Port to listen on
	#[arg(long, env = "WORDSERV_PORT", default_value_t = 80)]
	pub port: u16,

	/// Accepted for compatibility with older deployments; not enforced
	#[arg(long, env = "WORDSERV_MAX_CHARACTERS", default_value_t = 0)]
	pub max_characters: usize,

	/// Most words returned by one `/words` request
	#[arg(long, env = "WORDSERV_MAX_WORDS", default_value_t = 5000)]
	pub max_words: usize,

	/// Most paragraphs returned by one `/paragraphs` request
	#[arg(long, env = "WORDSERV_MAX_PARAGRAPHS", default_value_t = 50)]
	pub max_paragraphs: usize,

	/// Most chapters returned by one `/chapters` request
	#[arg(long, env = "WORDSERV_MAX_CHAPTERS", default_value_t = 3)]
	pub max_chapters: usize,

	/// Directory holding one plain-text file per book
	#[arg(long, env = "WORDSERV_BOOK_DIR")]
	pub book_dir: PathBuf,
}

impl Config {
	pub fn limits(&self) -> Limits {
		Limits::new(self.max_words, self.max_paragraphs, self.max_chapters)
	}
}
