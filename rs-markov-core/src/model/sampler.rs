use rand::Rng;
use rand::seq::IndexedRandom;

use super::chain::Chain;
use super::ngram::NGram;
use crate::error::{MarkovError, Result};

/// Random walk over a `Chain`.
///
/// The walk starts on a uniformly chosen n-gram whose first word is
/// capitalized, then repeatedly picks one of the followers of the current
/// window and slides the window onto it. It stops when the window was never
/// seen in the source text, or once `max_words` words were produced.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
	chain: &'a Chain,
	max_words: Option<usize>,
}

impl<'a> Sampler<'a> {
	/// Creates an uncapped sampler over `chain`.
	pub fn new(chain: &'a Chain) -> Self {
		Self { chain, max_words: None }
	}

	/// Caps the output length. `None` removes the cap.
	pub fn with_max_words(mut self, max_words: Option<usize>) -> Self {
		self.max_words = max_words;
		self
	}

	/// Picks the starting window uniformly among the capitalized keys.
	///
	/// # Errors
	/// - `MarkovError::EmptyChain` if the chain has no key at all
	/// - `MarkovError::NoStartKey` if no key starts with an uppercase word
	pub fn start_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a NGram> {
		let chain = self.chain;
		if chain.is_empty() {
			return Err(MarkovError::EmptyChain { order: chain.order() });
		}
		chain.start_keys().choose(rng).copied().ok_or(MarkovError::NoStartKey)
	}

	/// Walks the chain and returns the produced words.
	///
	/// The output begins with the start window, so it holds at least `n` words.
	pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<&'a str>> {
		let chain = self.chain;
		let start = self.start_key(rng)?;
		log::debug!("starting walk on {}", start);

		let mut words: Vec<&'a str> = start.iter().collect();
		let mut current = start.clone();

		while let Some(followers) = chain.get(&current) {
			if let Some(max_words) = self.max_words {
				if words.len() >= max_words {
					log::warn!("walk stopped after {} words without reaching a dead end", words.len());
					break;
				}
			}
			// Follower lists are never empty
			let Some(next) = followers.choose(rng) else { break };
			words.push(next.as_str());
			current = current.shifted(next);
		}

		Ok(words)
	}

	/// Walks the chain and joins the words with single spaces.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		Ok(self.walk(rng)?.join(" "))
	}
}

/// Samples one text from `chain` using the thread RNG.
pub fn generate(chain: &Chain) -> Result<String> {
	Sampler::new(chain).generate(&mut rand::rng())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn chain(text: &str, n: usize) -> Chain {
		Chain::from_text(text, n).unwrap()
	}

	#[test]
	fn single_start_single_follower_is_deterministic() {
		let chain = chain("Once upon time", 2);
		for seed in 0..10 {
			let mut rng = StdRng::seed_from_u64(seed);
			assert_eq!(Sampler::new(&chain).generate(&mut rng).unwrap(), "Once upon time");
		}
	}

	#[test]
	fn thread_rng_shortcut_generates() {
		assert_eq!(generate(&chain("Once upon time", 2)).unwrap(), "Once upon time");
	}

	#[test]
	fn every_step_is_a_recorded_transition() {
		let text = "The cat sat on the mat and the dog sat on the cat while The bird sang on the dog";
		for n in 1..=3 {
			let chain = chain(text, n);
			for seed in 0..50 {
				let mut rng = StdRng::seed_from_u64(seed);
				let words = Sampler::new(&chain).with_max_words(Some(500)).walk(&mut rng).unwrap();
				assert!(words.len() >= n);
				assert!(words[0].starts_with(char::is_uppercase));
				for window in words.windows(n + 1) {
					let key = NGram::from_words(&window[..n]);
					let followers = chain.get(&key).expect("window taken during the walk must be a key");
					assert!(followers.iter().any(|w| w == window[n]));
				}
			}
		}
	}

	#[test]
	fn walk_ends_on_an_unknown_window() {
		let chain = chain("Hi there mary hi there juanita", 2);
		let mut rng = StdRng::seed_from_u64(3);
		let words = Sampler::new(&chain).walk(&mut rng).unwrap();
		let tail = NGram::from_words(&words[words.len() - 2..]);
		assert!(!chain.contains(&tail));
	}

	#[test]
	fn empty_chain_fails() {
		let chain = chain("Too short", 2);
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(
			Sampler::new(&chain).generate(&mut rng),
			Err(MarkovError::EmptyChain { order: 2 })
		));
	}

	#[test]
	fn no_capitalized_key_fails_instead_of_spinning() {
		let chain = chain("all lower case words here", 2);
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(Sampler::new(&chain).generate(&mut rng), Err(MarkovError::NoStartKey)));
	}

	#[test]
	fn cap_bounds_a_cyclic_chain() {
		// Every window has a follower, the walk never hits a dead end
		let chain = chain("Hi there Hi there", 1);
		let mut rng = StdRng::seed_from_u64(0);
		let words = Sampler::new(&chain).with_max_words(Some(7)).walk(&mut rng).unwrap();
		assert_eq!(words, vec!["Hi", "there", "Hi", "there", "Hi", "there", "Hi"]);
	}

	#[test]
	fn cap_below_order_keeps_start_window() {
		let chain = chain("Alpha beta gamma delta", 3);
		let mut rng = StdRng::seed_from_u64(0);
		let words = Sampler::new(&chain).with_max_words(Some(1)).walk(&mut rng).unwrap();
		assert_eq!(words, vec!["Alpha", "beta", "gamma"]);
	}

	#[test]
	fn start_is_spread_over_capitalized_keys() {
		let chain = chain("Alpha x Beta x Gamma x end", 1);
		let sampler = Sampler::new(&chain);
		let mut rng = StdRng::seed_from_u64(42);
		let mut seen = std::collections::HashSet::new();
		for _ in 0..200 {
			seen.insert(sampler.start_key(&mut rng).unwrap().to_string());
		}
		assert_eq!(seen.len(), 3);
	}
}
