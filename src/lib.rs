//! # wordsort
//!
//! Extracts the distinct words of a text and writes them in sorted order,
//! using a persistent Red-Black Tree as the deduplicating, sorting container.
//!
//! ## Overview
//!
//! - **Persistent Data Structures**: [`PersistentOrderedSet`](persistent::PersistentOrderedSet),
//!   an immutable sorted set where every insertion yields a new version that
//!   shares unchanged subtrees with the previous one
//! - **Pipeline**: reading, tokenizing, accumulating and writing words
//! - **Configuration**: command line / environment settings for the binary
//!
//! ## Feature Flags
//!
//! - `persistent`: Persistent ordered set
//! - `pipeline`: Word pipeline and command line configuration
//! - `arc`: Thread-safe reference counting for the persistent set
//! - `serde`: Serialization of the persistent set
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use wordsort::prelude::*;
//!
//! let words = accumulate(tokenize("the quick fox jumps over the lazy dog"));
//! assert_eq!(words.len(), 7);
//! assert_eq!(words.min().map(String::as_str), Some("dog"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use wordsort::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "pipeline")]
    pub use crate::config::AppConfig;
}

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "pipeline")]
pub mod config;

#[cfg(feature = "pipeline")]
pub mod pipeline;
