//! Serializing the sorted words, one per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::PipelineError;
use crate::persistent::PersistentOrderedSet;

/// Writes each word followed by `\n`, including the last one.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Propagates any error of the underlying writer.
///
/// # Examples
///
/// ```
/// use wordsort::pipeline::write_words;
///
/// let mut buffer = Vec::new();
/// let lines = write_words(&mut buffer, ["apple", "pear"]).unwrap();
/// assert_eq!(lines, 2);
/// assert_eq!(buffer, b"apple\npear\n");
/// ```
pub fn write_words<W, I, S>(writer: &mut W, words: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = 0;
    for word in words {
        writer.write_all(word.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        lines += 1;
    }
    Ok(lines)
}

/// Creates (or truncates) `path` and writes the set there in sorted order.
///
/// # Errors
///
/// Returns [`PipelineError::Write`] if the destination cannot be created,
/// written or flushed.
pub fn write_destination(
    path: &Path,
    words: &PersistentOrderedSet<String>,
) -> Result<usize, PipelineError> {
    let file = File::create(path).map_err(|source| PipelineError::write(path, source))?;
    let mut writer = BufWriter::new(file);

    let lines =
        write_words(&mut writer, words).map_err(|source| PipelineError::write(path, source))?;
    writer
        .flush()
        .map_err(|source| PipelineError::write(path, source))?;

    tracing::debug!("Wrote {} lines to {}", lines, path.display());
    Ok(lines)
}
