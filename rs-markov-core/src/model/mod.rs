//! Top-level module for the Markov chain generator.
//!
//! - Value-typed n-gram keys (`NGram`)
//! - Append-only construction of the transition mapping (`ChainBuilder`)
//! - The frozen transition mapping (`Chain`)
//! - Random walk sampling (`Sampler`)
//! - Run configuration (`GenerationInput`)

/// Fixed-length, order-sensitive window of words used as a chain key.
pub mod ngram;

/// Immutable mapping from n-grams to the words that followed them.
pub mod chain;

/// Accumulates windows of a text into a `Chain`.
///
/// Deterministic: the same text always yields the same chain.
pub mod builder;

/// Random walk over a `Chain`, seeded on a capitalized n-gram.
pub mod sampler;

/// Generation parameters (order, walk cap, RNG seed).
pub mod generation_input;
