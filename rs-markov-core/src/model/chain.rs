use std::collections::HashMap;

use super::builder::ChainBuilder;
use super::ngram::NGram;
use crate::error::Result;

/// Word-level Markov chain of order `n`.
///
/// Maps every n-gram seen in a source text to the words that followed it,
/// in order of occurrence. Duplicates are kept so that a uniform pick over
/// the list is proportional to the observed frequency.
///
/// A `Chain` is only produced by `ChainBuilder::build` and never changes afterwards.
///
/// # Invariants
/// - Every key has exactly `n` words
/// - Every key was observed in the source and has a non-empty follower list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	/// The order of the chain (number of words per key)
	n: usize,

	/// Mapping from a window to the words observed right after it.
	/// Example: { (hi, there) => [mary, juanita] }
	transitions: HashMap<NGram, Vec<String>>,
}

impl Chain {
	pub(crate) fn from_parts(n: usize, transitions: HashMap<NGram, Vec<String>>) -> Self {
		Self { n, transitions }
	}

	/// Builds a chain of order `n` from a single text.
	///
	/// # Errors
	/// Returns `MarkovError::InvalidOrder` if `n == 0`.
	pub fn from_text(text: &str, n: usize) -> Result<Self> {
		let mut builder = ChainBuilder::new(n)?;
		builder.add_text(text);
		Ok(builder.build())
	}

	/// Number of words per key.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Words observed after `key`, or `None` if the key never occurred.
	pub fn get(&self, key: &NGram) -> Option<&[String]> {
		self.transitions.get(key).map(Vec::as_slice)
	}

	pub fn contains(&self, key: &NGram) -> bool {
		self.transitions.contains_key(key)
	}

	/// Iterates all keys (arbitrary order).
	pub fn keys(&self) -> impl Iterator<Item = &NGram> {
		self.transitions.keys()
	}

	/// Iterates `(key, followers)` pairs (arbitrary order).
	pub fn iter(&self) -> impl Iterator<Item = (&NGram, &[String])> {
		self.transitions.iter().map(|(k, v)| (k, v.as_slice()))
	}

	/// Total number of recorded transitions, duplicates included.
	///
	/// Equals the number of windows fed to the builder.
	pub fn transition_count(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Keys allowed to start a generated text, sorted.
	///
	/// A key qualifies when its first word begins with an uppercase letter.
	/// Sorting makes a seeded pick independent of the hash map layout.
	pub fn start_keys(&self) -> Vec<&NGram> {
		let mut keys: Vec<&NGram> = self.keys().filter(|key| key.starts_uppercase()).collect();
		keys.sort_unstable();
		keys
	}
}
