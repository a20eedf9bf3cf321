//! Command line configuration.
//!
//! The command line is `wordsort <INPUT> [OUTPUT]`. The output path may
//! instead be given with `-o/--output` or the `WORDSORT_OUTPUT` environment
//! variable. When several are present the positional `OUTPUT` wins, then
//! `--output`, then the environment, then [`DEFAULT_OUTPUT`].
//!
//! # Example
//!
//! ```rust
//! use wordsort::config::AppConfig;
//!
//! let config = AppConfig::try_parse_from(["wordsort", "book.txt", "words.txt"]).unwrap();
//! assert_eq!(config.input.to_str(), Some("book.txt"));
//! assert_eq!(config.output.to_str(), Some("words.txt"));
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Raw command line as clap sees it.
#[derive(Debug, Parser)]
#[command(
    name = "wordsort",
    version,
    about = "Writes the distinct words of a text file in sorted order, one per line"
)]
struct Arguments {
    /// Text file to read words from.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File to write the sorted unique words to [default: output.txt]
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Same as OUTPUT; ignored when OUTPUT is given.
    #[arg(
        id = "output_option",
        short = 'o',
        long = "output",
        value_name = "PATH",
        env = "WORDSORT_OUTPUT"
    )]
    output_option: Option<PathBuf>,
}

impl From<Arguments> for AppConfig {
    fn from(arguments: Arguments) -> Self {
        let output = arguments
            .output
            .or(arguments.output_option)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        Self::new(arguments.input, output)
    }
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Text file to read words from.
    pub input: PathBuf,
    /// File to write the sorted unique words to.
    pub output: PathBuf,
}

impl AppConfig {
    /// Creates a configuration programmatically.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Parses the process arguments, exiting with a usage message on error.
    #[must_use]
    pub fn parse() -> Self {
        Arguments::parse().into()
    }

    /// Parses the given arguments; the first one is the program name.
    ///
    /// # Errors
    ///
    /// Returns the clap error describing the invalid command line.
    pub fn try_parse_from<I, T>(arguments: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Arguments::try_parse_from(arguments).map(Self::from)
    }

    /// Returns the clap command, for help rendering and checks.
    #[must_use]
    pub fn command() -> clap::Command {
        Arguments::command()
    }
}
