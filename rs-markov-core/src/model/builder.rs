use std::collections::HashMap;

use super::chain::Chain;
use super::ngram::NGram;
use crate::error::{MarkovError, Result};

/// Splits a text into words on any whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split_whitespace().collect()
}

/// Accumulates the windows of one or more texts into a transition mapping.
///
/// # Responsibilities
/// - Slide a window of `n + 1` words over each text
/// - Append the last word of every window to the list of its first `n` words
/// - Freeze the result into an immutable `Chain`
///
/// # Invariants
/// - `n` is always >= 1
/// - Follower lists are append-only and never empty
#[derive(Debug)]
pub struct ChainBuilder {
	n: usize,
	transitions: HashMap<NGram, Vec<String>>,
}

impl ChainBuilder {
	/// Creates an empty builder for keys of `n` words.
	///
	/// # Errors
	/// Returns `MarkovError::InvalidOrder` if `n == 0`.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 {
			return Err(MarkovError::InvalidOrder(n));
		}
		Ok(Self { n, transitions: HashMap::new() })
	}

	/// Adds every window of `text` to the mapping.
	///
	/// Returns the number of windows recorded, `max(0, words - n)`.
	/// A text of `n` words or fewer records nothing.
	pub fn add_text(&mut self, text: &str) -> usize {
		let words = tokenize(text);
		if words.len() <= self.n {
			return 0;
		}

		for window in words.windows(self.n + 1) {
			let (prefix, next) = window.split_at(self.n);
			self.transitions
				.entry(NGram::from_words(prefix))
				.or_default()
				.push(next[0].to_owned());
		}

		words.len() - self.n
	}

	/// Freezes the accumulated mapping.
	pub fn build(self) -> Chain {
		Chain::from_parts(self.n, self.transitions)
	}
}
