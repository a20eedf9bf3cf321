//! Text pipeline feeding a [`PersistentOrderedSet`].
//!
//! The pipeline reads an input source, splits it into lowercase words,
//! folds them into a persistent ordered set and writes the set back out one
//! word per line:
//!
//! ```text
//! read_source ─► tokenize ─► accumulate ─► write_destination
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wordsort::pipeline::{accumulate, tokenize, write_words};
//!
//! let words = accumulate(tokenize("Hello, world! Welcome to the test."));
//!
//! let mut output = Vec::new();
//! write_words(&mut output, &words).unwrap();
//! assert_eq!(output, b"hello\ntest\nthe\nto\nwelcome\nworld\n");
//! ```

mod error;
mod source;
mod tokenizer;
mod writer;

pub use error::PipelineError;
pub use source::{read_from, read_source};
pub use tokenizer::{Tokens, tokenize};
pub use writer::{write_destination, write_words};

use crate::config::AppConfig;
use crate::persistent::PersistentOrderedSet;

/// Counts reported by a completed [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of words in the input, duplicates included.
    pub tokens: usize,
    /// Number of distinct words written.
    pub unique: usize,
}

/// Folds words into a set, inserting them left to right.
///
/// Only the final version of the set is kept.
pub fn accumulate<I>(words: I) -> PersistentOrderedSet<String>
where
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .fold(PersistentOrderedSet::new(), |set, word| set.insert(word))
}

/// Runs the whole pipeline from `config.input` to `config.output`.
///
/// # Errors
///
/// Returns [`PipelineError::Read`] if the input cannot be read and
/// [`PipelineError::Write`] if the output cannot be written. Nothing is
/// written when reading fails.
pub fn run(config: &AppConfig) -> Result<RunSummary, PipelineError> {
    let text = read_source(&config.input)?;

    let mut tokens = 0;
    let words = accumulate(tokenize(&text).inspect(|_| tokens += 1));
    tracing::debug!(
        "Collected {} unique words out of {} (tree height {})",
        words.len(),
        tokens,
        words.height()
    );

    let unique = write_destination(&config.output, &words)?;
    tracing::info!(
        "Wrote {} unique words to {}",
        unique,
        config.output.display()
    );

    Ok(RunSummary { tokens, unique })
}
