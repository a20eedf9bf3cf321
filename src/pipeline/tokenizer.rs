//! Splits text into lowercase ASCII words.
//!
//! A word is a maximal run of ASCII alphabetic bytes. Every other byte,
//! including each byte of a non-ASCII character in any encoding, separates
//! words and is dropped.

use std::iter::FusedIterator;

/// Returns a lazy iterator over the words of `text`, in document order.
///
/// Accepts anything viewable as bytes, so text that is not valid UTF-8
/// (Latin-1 files, for instance) is tokenized the same way. Words are
/// lowercased; duplicates are kept.
///
/// # Examples
///
/// ```
/// use wordsort::pipeline::tokenize;
///
/// let words: Vec<String> = tokenize("Hello, World! Welcome to C++ testing.").collect();
/// assert_eq!(words, vec!["hello", "world", "welcome", "to", "c", "testing"]);
///
/// let latin1: Vec<String> = tokenize(b"Caf\xe9 au lait").collect();
/// assert_eq!(latin1, vec!["caf", "au", "lait"]);
/// ```
#[must_use]
pub fn tokenize<T>(text: &T) -> Tokens<'_>
where
    T: AsRef<[u8]> + ?Sized,
{
    Tokens {
        bytes: text.as_ref(),
        position: 0,
    }
}

/// Iterator returned by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.bytes;
        let Some(offset) = bytes[self.position..]
            .iter()
            .position(u8::is_ascii_alphabetic)
        else {
            self.position = bytes.len();
            return None;
        };

        let start = self.position + offset;
        let end = bytes[start..]
            .iter()
            .position(|byte| !byte.is_ascii_alphabetic())
            .map_or(bytes.len(), |length| start + length);
        self.position = end;

        Some(
            bytes[start..end]
                .iter()
                .map(|byte| char::from(byte.to_ascii_lowercase()))
                .collect(),
        )
    }
}

impl FusedIterator for Tokens<'_> {}
