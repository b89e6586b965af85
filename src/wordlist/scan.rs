//! Line-by-line scanning of word-list files.
//!
//! Two passes over the raw (un-mapped) file: [`measure`] derives the record
//! layout the way the trusted constructors need it, and [`verify`] confirms
//! the sorted/fixed-width invariant for the checking loader. Both work on any
//! `BufRead`, so they are unit-testable against in-memory cursors.

use std::io::{self, BufRead};

use super::cmp;

/// The measurable shape of a fixed-width word list.
///
/// Returned by [`FileDictionary::layout`](super::FileDictionary::layout) so a
/// caller can persist it and reopen the file later without a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    /// Bytes per record, line terminator included.
    pub record_width: u64,
    /// Number of non-comment entries.
    pub word_count: u64,
}

/// Which lines contribute to the measured maximum line length.
///
/// The record width is the maximum plus one terminator byte either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Every line counts, comment lines included.
    #[default]
    AllLines,
    /// Only word lines count; comment lines never influence the width.
    WordsOnly,
}

/// Options for scanning a word list.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// First byte marking a line as a comment. Comment lines are never words.
    pub comment_marker: u8,
    pub width_policy: WidthPolicy,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            comment_marker: b'#',
            width_policy: WidthPolicy::AllLines,
        }
    }
}

/// A failure while scanning a word list.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ScanError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The sorted/fixed-width invariant does not hold.
    #[error("line {line}: {reason}")]
    Invalid { line: u64, reason: String },
}

/// Strip the terminator off a raw line: one trailing `\n`, then any `\r`.
fn trim_terminator(line: &[u8]) -> &[u8] {
    let mut line = line;
    if line.last() == Some(&b'\n') {
        line = &line[..line.len() - 1];
    }
    while line.last() == Some(&b'\r') {
        line = &line[..line.len() - 1];
    }
    line
}

/// Derive the record layout of a raw word list.
///
/// Counts non-comment lines as words and tracks the maximum line length in
/// bytes (terminator excluded, padding included); the record width is the
/// maximum plus one. Empty lines count as words. Performs no validation.
pub(crate) fn measure<R: BufRead>(
    mut reader: R,
    options: &ScanOptions,
) -> io::Result<RecordLayout> {
    let mut buf = Vec::new();
    let mut word_count = 0u64;
    let mut max_len = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = trim_terminator(&buf);
        let is_comment = line.first() == Some(&options.comment_marker);
        if !is_comment {
            word_count += 1;
        }
        let measured = match options.width_policy {
            WidthPolicy::AllLines => true,
            WidthPolicy::WordsOnly => !is_comment,
        };
        if measured {
            max_len = max_len.max(line.len() as u64);
        }
    }

    Ok(RecordLayout {
        record_width: max_len + 1,
        word_count,
    })
}

/// Confirm the sorted/fixed-width invariant in one pass.
///
/// Checks that every line occupies the same on-disk stride (the final line
/// may lack its terminator), that the stride equals the maximum word length
/// plus one, and that word records never decrease under the case-insensitive
/// exact ordering. Comment lines take part in the stride check but never in
/// the ordering check.
pub(crate) fn verify<R: BufRead>(
    mut reader: R,
    options: &ScanOptions,
) -> Result<RecordLayout, ScanError> {
    let mut buf = Vec::new();
    let mut word_count = 0u64;
    let mut max_len = 0u64;
    let mut line_no = 0u64;
    let mut stride: Option<u64> = None;
    let mut previous_word: Option<Vec<u8>> = None;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)? as u64;
        if read == 0 {
            break;
        }
        line_no += 1;
        let terminated = buf.last() == Some(&b'\n');

        // A missing terminator is only possible on the final line; its record
        // is one byte short of the stride.
        let implied = if terminated { read } else { read + 1 };
        match stride {
            None => stride = Some(implied),
            Some(stride) if implied != stride => {
                return Err(ScanError::Invalid {
                    line: line_no,
                    reason: format!("record occupies {implied} bytes, expected {stride}"),
                });
            }
            Some(_) => {}
        }

        let line = trim_terminator(&buf);
        let is_comment = line.first() == Some(&options.comment_marker);
        let word = cmp::strip_padding(line);
        let measured = match options.width_policy {
            WidthPolicy::AllLines => true,
            WidthPolicy::WordsOnly => !is_comment,
        };
        if measured {
            max_len = max_len.max(word.len() as u64);
        }

        if !is_comment {
            word_count += 1;
            if let Some(previous) = &previous_word {
                if cmp::compare_exact(word, Some(previous)) == std::cmp::Ordering::Less {
                    return Err(ScanError::Invalid {
                        line: line_no,
                        reason: format!(
                            "'{}' sorts before the preceding entry '{}'",
                            String::from_utf8_lossy(word),
                            String::from_utf8_lossy(previous),
                        ),
                    });
                }
            }
            previous_word = Some(word.to_vec());
        }
    }

    let record_width = max_len + 1;
    if let Some(stride) = stride {
        if stride != record_width {
            return Err(ScanError::Invalid {
                line: line_no,
                reason: format!(
                    "stride is {stride} bytes but the longest entry needs {record_width}"
                ),
            });
        }
    }

    Ok(RecordLayout {
        record_width,
        word_count,
    })
}
