//! Reading the input text.
//!
//! Input is kept as raw bytes: the tokenizer only looks at ASCII letters,
//! so the encoding of the rest of the text does not matter.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::PipelineError;

/// Reads everything `reader` yields into memory.
///
/// # Errors
///
/// Propagates any error of the underlying reader.
///
/// # Examples
///
/// ```
/// use wordsort::pipeline::read_from;
///
/// let text = read_from(&b"in memory"[..]).unwrap();
/// assert_eq!(text, b"in memory");
/// ```
pub fn read_from<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut text = Vec::new();
    reader.read_to_end(&mut text)?;
    Ok(text)
}

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns [`PipelineError::Read`] if the file is missing or unreadable.
pub fn read_source(path: &Path) -> Result<Vec<u8>, PipelineError> {
    let text = File::open(path)
        .and_then(read_from)
        .map_err(|source| PipelineError::read(path, source))?;
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
