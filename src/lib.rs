//! # passdict
//!
//! A binary-search engine for the sorted, fixed-width word lists (`.words`
//! files) that back dictionary-pattern detection in password-strength
//! analysis.
//!
//! The file format and the invariants the engine relies on are documented on
//! [`wordlist::FileDictionary`]. Input files must already be normalized
//! (sorted case-insensitively and padded to a uniform record width) by an
//! external step; this crate searches them, it never repairs them.

pub mod wordlist;

// Re-export the main types for convenience
pub use wordlist::{
    CandidateWindow, DictionaryError, FileDictionary, RecordLayout, ScanOptions, WidthPolicy,
    WORD_LIST_EXTENSION,
};
