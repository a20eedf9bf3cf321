//! wordsort
//!
//! Reads a text file and writes its distinct words, lowercased and sorted,
//! one per line.
//!
//! # Usage
//!
//! ```bash
//! wordsort book.txt                  # writes output.txt
//! wordsort book.txt words.txt
//! wordsort book.txt -o words.txt
//! WORDSORT_OUTPUT=words.txt wordsort book.txt
//! RUST_LOG=wordsort=debug wordsort book.txt
//! ```

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordsort::config::AppConfig;
use wordsort::pipeline;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,wordsort=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::parse();
    tracing::debug!(
        "Configuration loaded: input={}, output={}",
        config.input.display(),
        config.output.display()
    );

    match pipeline::run(&config) {
        Ok(summary) => {
            tracing::debug!(
                "{} words in, {} unique words out",
                summary.tokens,
                summary.unique
            );
            println!(
                "Unique sorted words written to {}",
                config.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!("Pipeline failed: {error:?}");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
