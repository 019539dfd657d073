use std::fs;
use std::path::Path;

use crate::error::{MarkovError, Result};

/// Reads a whole text file and returns it as a single line.
///
/// - Reads the entire file into memory
/// - Replaces every `\n` by a space, trailing spaces are trimmed
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| MarkovError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(normalize_newlines(&contents))
}

/// Turns a multi-line text into one line.
///
/// Example:
/// `"one\ntwo\n"` → `"one two"`
pub(crate) fn normalize_newlines(text: &str) -> String {
	text.replace('\n', " ").trim_end_matches(' ').to_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn newlines_become_spaces() {
		assert_eq!(normalize_newlines("hi there\nmary\n"), "hi there mary");
		assert_eq!(normalize_newlines("a\n\nb"), "a  b");
	}

	#[test]
	fn missing_file_reports_path() {
		let err = read_text("/definitely/not/here.txt").unwrap_err();
		match err {
			MarkovError::Io { path, .. } => assert_eq!(path, Path::new("/definitely/not/here.txt")),
			other => panic!("unexpected error: {:?}", other),
		}
	}
}
