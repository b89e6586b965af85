//! Binary-search engine for sorted, fixed-width word lists.
//!
//! A [`FileDictionary`] wraps a word-list file whose entries are padded to a
//! uniform record width and sorted ascending case-insensitively, which makes
//! direct offset arithmetic possible: two binary searches over byte offsets
//! answer "is this text a stored word?" ([`FileDictionary::is_match`]) and
//! "could this text grow into one?" ([`FileDictionary::narrow`]).
//!
//! The second question is the interesting one. A password analyzer tests
//! every substring of a password, extending each starting offset one
//! character at a time. Instead of rerunning a full search per length, the
//! caller threads a [`CandidateWindow`] through successive `narrow` calls;
//! each call tightens the range, and a `None` proves no stored word extends
//! the current text, pruning the whole branch.

pub mod error;

mod cmp;
mod dict;
mod scan;
mod search;
mod window;

pub use dict::{FileDictionary, WORD_LIST_EXTENSION};
pub use error::{DictionaryError, Result};
pub use scan::{RecordLayout, ScanOptions, WidthPolicy};
pub use window::CandidateWindow;
