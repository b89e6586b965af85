//! Custom error types for the passdict crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant carries the dictionary's name so a caller juggling several
/// word lists can tell which one failed.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list could not be opened, read, or mapped.
    #[error("could not read word list '{name}' ({path:?}): {source}")]
    Build {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The verifying loader found the sorted/fixed-width precondition broken.
    #[error("word list '{name}' ({path:?}) is not a valid fixed-width list at line {line}: {reason}")]
    Invalid {
        name: String,
        path: PathBuf,
        /// 1-based line number of the first offending line.
        line: u64,
        reason: String,
    },

    /// A caller-supplied record layout is unusable.
    #[error("unusable record layout for word list '{name}': {reason}")]
    Layout { name: String, reason: String },
}

/// A convenience `Result` type alias using the crate's `DictionaryError` type.
pub type Result<T> = std::result::Result<T, DictionaryError>;
