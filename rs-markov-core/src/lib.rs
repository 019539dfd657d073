//! Word-level n-gram Markov text generation library.
//!
//! This crate provides:
//! - A chain builder mapping every n-word window of a text to the words
//!   observed right after it
//! - A sampler performing a random walk over that chain
//! - A file-to-string entry point, leaving process I/O to the caller
//!
//! ```no_run
//! use rs_markov_core::model::generation_input::GenerationInput;
//!
//! let text = rs_markov_core::generate_from_file("corpus.txt", &GenerationInput::default())?;
//! println!("{}", text);
//! # Ok::<(), rs_markov_core::error::MarkovError>(())
//! ```

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::model::builder::ChainBuilder;
use crate::model::chain::Chain;
use crate::model::generation_input::GenerationInput;
use crate::model::sampler::Sampler;

/// Chain construction and random walk sampling.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// File loading helpers.
pub mod io;

/// Reads `path`, builds a chain of the configured order and samples one text from it.
///
/// The file is read fully into memory with newlines turned into spaces.
///
/// # Errors
/// - `MarkovError::Io` if the file cannot be read
/// - any error from [`generate_from_text`]
pub fn generate_from_file<P: AsRef<Path>>(path: P, input: &GenerationInput) -> Result<String> {
	let text = io::read_text(&path)?;
	log::debug!("read {} bytes from {}", text.len(), path.as_ref().display());
	generate_from_text(&text, input)
}

/// Builds a chain from `text` and samples one text from it.
///
/// # Errors
/// - `MarkovError::EmptyChain` if the text has no more than `order` tokens
/// - `MarkovError::NoStartKey` if no window starts with an uppercase word
pub fn generate_from_text(text: &str, input: &GenerationInput) -> Result<String> {
	let mut builder = ChainBuilder::new(input.order())?;
	let windows = builder.add_text(text);
	let chain: Chain = builder.build();
	log::debug!("recorded {} windows over {} distinct keys (n = {})", windows, chain.len(), chain.order());

	let sampler = Sampler::new(&chain).with_max_words(input.max_words);
	match input.seed {
		Some(seed) => sampler.generate(&mut StdRng::seed_from_u64(seed)),
		None => sampler.generate(&mut rand::rng()),
	}
}
