use crate::error::{MarkovError, Result};

/// Word count the command-line tool stops a walk at.
///
/// A chain whose last window also appears earlier in the text can cycle forever.
pub const DEFAULT_MAX_WORDS: usize = 10_000;

/// Parameters of a generation run.
///
/// # Responsibilities
/// - Track the chain order (`order`, validated)
/// - Track the walk cap (`max_words`) and the optional RNG seed (`seed`)
///
/// # Invariants
/// - `order` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of words per n-gram key.
	order: usize,

	/// Stops the walk once the output holds this many words. `None` walks until a dead end.
	pub max_words: Option<usize>,

	/// Seeds a `StdRng` for reproducible output. `None` uses the thread RNG.
	pub seed: Option<u64>,
}

impl Default for GenerationInput {
	/// Bigram chain, no walk cap, unseeded.
	fn default() -> Self {
		Self { order: 2, max_words: None, seed: None }
	}
}

impl GenerationInput {
	/// Returns the chain order.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Sets the chain order.
	///
	/// # Errors
	/// Returns `MarkovError::InvalidOrder` if `order == 0`.
	pub fn set_order(&mut self, order: usize) -> Result<()> {
		if order == 0 {
			return Err(MarkovError::InvalidOrder(order));
		}
		self.order = order;
		Ok(())
	}
}
