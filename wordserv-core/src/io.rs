use std::path::{Path, PathBuf};
use std::{fs, io};

/// Reads a text file into a `String`.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 sequences are replaced with `U+FFFD`
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let bytes = fs::read(filename)?;
	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lists every non-directory entry of a directory.
///
/// - Not recursive
/// - Returns full paths sorted by file name, so loading order is stable
pub(crate) fn list_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		if entry.file_type()?.is_dir() {
			continue;
		}
		files.push(entry.path());
	}

	files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
	Ok(files)
}
