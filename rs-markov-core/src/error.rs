//! Error types for chain building and sampling.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarkovError>;

/// Every way a generation run can fail.
#[derive(Error, Debug)]
pub enum MarkovError {
	/// Input file missing or unreadable
	#[error("cannot read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Window size must be at least one word
	#[error("n-gram order must be >= 1, got {0}")]
	InvalidOrder(usize),

	/// The text had no more than `order` tokens, so no window was recorded
	#[error("chain is empty: the text needs more than {order} words")]
	EmptyChain { order: usize },

	/// No window starts with a capitalized word
	#[error("no n-gram starts with an uppercase word, cannot pick a start")]
	NoStartKey,
}
