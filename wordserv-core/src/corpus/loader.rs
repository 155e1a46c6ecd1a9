use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};

use super::{tokenize, Book, Corpus};
use crate::error::{CorpusError, Result};
use crate::io::{list_files, read_text};

impl Corpus {
	/// Loads every file of a directory as a book.
	///
	/// # Behavior
	/// - Reads each non-directory entry of `dir` (not recursive)
	/// - Tokenizes the files on worker threads, one chunk per CPU
	/// - Keeps books in file name order
	/// - Skips files without any content
	///
	/// # Errors
	/// - `ListDirectory` if `dir` cannot be listed
	/// - `ReadBook` if a file cannot be read
	/// - `Empty` if no file holds any content
	pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
		let dir = dir.as_ref();
		let files = list_files(dir).map_err(|source| CorpusError::ListDirectory {
			path: dir.to_path_buf(),
			source,
		})?;

		let mut texts = Vec::with_capacity(files.len());
		for path in files {
			match read_text(&path) {
				Ok(text) => texts.push((path, text)),
				Err(source) => return Err(CorpusError::ReadBook { path, source }),
			}
		}

		let mut books = Vec::with_capacity(texts.len());
		for (path, book) in tokenize_all(texts)? {
			if book.is_empty() {
				warn!("Skipping '{}': no content", path.display());
				continue;
			}
			debug!("Loaded '{}' ({} chapters)", path.display(), book.chapters().len());
			books.push(book);
		}

		let corpus = Self::new(books)?;
		info!("Loaded {} books from '{}'", corpus.len(), dir.display());
		Ok(corpus)
	}
}

/// Tokenizes the texts in parallel and returns the books in input order.
///
/// # Notes
/// - Splits the input into one chunk per CPU
/// - Workers send `(position, path, book)` over an MPSC channel
/// - Books are put back at their original position before returning
fn tokenize_all(texts: Vec<(PathBuf, String)>) -> Result<Vec<(PathBuf, Book)>> {
	if texts.is_empty() {
		return Ok(Vec::new());
	}

	let total = texts.len();
	let chunk_size = total.div_ceil(num_cpus::get().max(1));

	let (tx, rx) = mpsc::channel();
	let mut pending: Vec<(usize, (PathBuf, String))> = texts.into_iter().enumerate().collect();
	let mut workers = Vec::new();
	while !pending.is_empty() {
		let rest = pending.split_off(chunk_size.min(pending.len()));
		let chunk = std::mem::replace(&mut pending, rest);
		let tx = tx.clone();

		workers.push(thread::spawn(move || {
			for (position, (path, text)) in chunk {
				if tx.send((position, path, tokenize(&text))).is_err() {
					return;
				}
			}
		}));
	}
	drop(tx);

	let mut slots: Vec<Option<(PathBuf, Book)>> = (0..total).map(|_| None).collect();
	for (position, path, book) in rx.iter() {
		slots[position] = Some((path, book));
	}
	for worker in workers {
		worker.join().map_err(|_| CorpusError::Worker)?;
	}

	slots.into_iter().map(|slot| slot.ok_or(CorpusError::Worker)).collect()
}
