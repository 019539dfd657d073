use std::path::PathBuf;

use clap::Parser;

use rs_markov_core::generate_from_file;
use rs_markov_core::model::generation_input::{DEFAULT_MAX_WORDS, GenerationInput};

/// Generate Markov text from a text file.
#[derive(Parser)]
#[command(name = "rs-markov")]
#[command(about = "Generate pseudo-random text from a bigram Markov chain", long_about = None)]
#[command(version)]
struct Cli {
	/// Text file to learn from
	input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();

	// Bigrams, capped so a cyclic chain still terminates
	let mut input = GenerationInput::default();
	input.max_words = Some(DEFAULT_MAX_WORDS);

	log::info!("generating from {}", cli.input.display());
	let text = generate_from_file(&cli.input, &input)?;
	println!("{}", text);

	Ok(())
}
