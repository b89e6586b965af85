//! The dictionary file: construction, accessors, and the search operations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use memmap2::Mmap;

use super::cmp;
use super::error::{DictionaryError, Result};
use super::scan::{self, RecordLayout, ScanError, ScanOptions};
use super::search::{self, RecordSource};
use super::window::CandidateWindow;

/// Conventional file extension for normalized fixed-width word lists.
pub const WORD_LIST_EXTENSION: &str = ".words";

/// A sorted, fixed-width word list searched by binary search over byte
/// offsets.
///
/// The file must hold one record per line, each padded to a common width
/// with its terminator as the final byte, sorted ascending by
/// case-insensitive order. An external normalizer produces that format;
/// [`FileDictionary::open`] confirms it once at load, while the `*_trusted`
/// and [`with_layout`](FileDictionary::with_layout) constructors take it on
/// faith. **If a trusted file violates the invariant, searches silently
/// return wrong answers — there is no runtime signal.**
///
/// The bytes are an immutable memory-mapped view established at
/// construction and released on drop, so searches take `&self`, perform no
/// I/O, and may run concurrently from multiple threads.
#[derive(Debug)]
pub struct FileDictionary {
    /// `None` only for a zero-length file, which cannot be mapped.
    map: Option<Mmap>,
    len: u64,
    record_width: u64,
    word_count: u64,
    name: String,
}

impl FileDictionary {
    /// Open a word list, verifying the sorted/fixed-width invariant.
    ///
    /// # Errors
    /// [`DictionaryError::Build`] if the file cannot be read or mapped;
    /// [`DictionaryError::Invalid`] naming the first offending line if the
    /// invariant does not hold.
    pub fn open(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Self> {
        Self::open_with(path, name, ScanOptions::default())
    }

    /// [`open`](Self::open) with explicit scan options.
    pub fn open_with(
        path: impl AsRef<Path>,
        name: impl Into<String>,
        options: ScanOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let name = name.into();
        info!("Opening word list (verified): {}", path.display());

        let file = File::open(path).map_err(|e| build_error(&name, path, e))?;
        let layout = scan::verify(BufReader::new(&file), &options).map_err(|e| match e {
            ScanError::Io(source) => build_error(&name, path, source),
            ScanError::Invalid { line, reason } => DictionaryError::Invalid {
                name: name.clone(),
                path: path.to_path_buf(),
                line,
                reason,
            },
        })?;

        Self::from_parts(file, name, path, layout)
    }

    /// Open a word list, trusting that it is already sorted and padded.
    ///
    /// Scans once to count words and derive the record width (maximum line
    /// length plus one terminator byte), then maps the same file for random
    /// access. Nothing is validated, padded, or sorted: searching a file
    /// that is unsorted or unevenly padded yields silently incorrect
    /// results.
    ///
    /// # Errors
    /// [`DictionaryError::Build`] if the file cannot be read or mapped.
    pub fn open_trusted(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Self> {
        Self::open_trusted_with(path, name, ScanOptions::default())
    }

    /// [`open_trusted`](Self::open_trusted) with explicit scan options.
    pub fn open_trusted_with(
        path: impl AsRef<Path>,
        name: impl Into<String>,
        options: ScanOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let name = name.into();
        info!("Opening word list (trusted): {}", path.display());

        let file = File::open(path).map_err(|e| build_error(&name, path, e))?;
        let layout = scan::measure(BufReader::new(&file), &options)
            .map_err(|e| build_error(&name, path, e))?;

        Self::from_parts(file, name, path, layout)
    }

    /// Open a word list whose layout is already known, skipping the scan.
    ///
    /// Same trust model as [`open_trusted`](Self::open_trusted): the layout
    /// and the file's contents are taken on faith.
    ///
    /// # Errors
    /// [`DictionaryError::Layout`] for a zero record width;
    /// [`DictionaryError::Build`] if the file cannot be read or mapped.
    pub fn with_layout(
        path: impl AsRef<Path>,
        name: impl Into<String>,
        layout: RecordLayout,
    ) -> Result<Self> {
        let path = path.as_ref();
        let name = name.into();
        if layout.record_width == 0 {
            return Err(DictionaryError::Layout {
                name,
                reason: "record width must be at least 1".to_string(),
            });
        }
        info!("Opening word list (known layout): {}", path.display());

        let file = File::open(path).map_err(|e| build_error(&name, path, e))?;
        Self::from_parts(file, name, path, layout)
    }

    /// Map the opened file and assemble the dictionary.
    ///
    /// The `File` handle is dropped once the mapping exists; the mapping
    /// lives until the dictionary is dropped.
    fn from_parts(file: File, name: String, path: &Path, layout: RecordLayout) -> Result<Self> {
        let len = file
            .metadata()
            .map_err(|e| build_error(&name, path, e))?
            .len();
        let map = if len == 0 {
            None
        } else {
            // Safety: the view is read-only; callers must not truncate or
            // rewrite the list while a dictionary holds it mapped.
            Some(unsafe { Mmap::map(&file) }.map_err(|e| build_error(&name, path, e))?)
        };

        info!(
            "Word list '{}': {} words, record width {} bytes, {} bytes total",
            name, layout.word_count, layout.record_width, len
        );

        Ok(Self {
            map,
            len,
            record_width: layout.record_width,
            word_count: layout.word_count,
            name,
        })
    }

    fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or(&[])
    }

    /// Identifying name, used in diagnostics and error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries, excluding comment lines.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Override the reported word count.
    ///
    /// Lets a caller recalibrate downstream strength scoring independent of
    /// the file's actual contents. Searches are unaffected.
    pub fn set_word_count(&mut self, count: u64) {
        self.word_count = count;
    }

    /// Bytes per record, terminator included.
    pub fn record_width(&self) -> u64 {
        self.record_width
    }

    /// Total byte length of the underlying file.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The layout pair needed to reopen this file via
    /// [`with_layout`](Self::with_layout).
    pub fn layout(&self) -> RecordLayout {
        RecordLayout {
            record_width: self.record_width,
            word_count: self.word_count,
        }
    }

    /// A window spanning the whole file, for a search sequence starting at
    /// text offset `offset`.
    pub fn initial_window(&self, offset: usize) -> CandidateWindow {
        CandidateWindow::new(0, self.len, offset)
    }

    /// Is `text` stored as an exact record anywhere in `window`'s range?
    ///
    /// Case-insensitive; the window is not narrowed.
    pub fn is_match(&self, window: CandidateWindow, text: &str) -> bool {
        search::find_exact(self, window, text.as_bytes())
    }

    /// Narrow `window` to the range still able to hold a word starting with
    /// `text`.
    ///
    /// `Some` carries the tightened window to thread into the next call as
    /// the candidate text grows one character at a time. `None` means no
    /// stored word has `text` as a prefix — and none can match any extension
    /// of it, so the caller stops extending at this offset.
    pub fn narrow(&self, window: CandidateWindow, text: &str) -> Option<CandidateWindow> {
        search::narrow_prefix(self, window, text.as_bytes())
    }

    /// Is `text` a stored word? Searches the whole file.
    pub fn contains(&self, text: &str) -> bool {
        self.is_match(self.initial_window(0), text)
    }
}

impl RecordSource for FileDictionary {
    fn record_width(&self) -> u64 {
        self.record_width
    }

    fn record_at(&self, offset: u64) -> Option<&[u8]> {
        let bytes = self.bytes();
        let offset = usize::try_from(offset).ok()?;
        if offset >= bytes.len() {
            return None;
        }
        let end = offset
            .saturating_add(self.record_width as usize)
            .min(bytes.len());
        Some(cmp::strip_padding(&bytes[offset..end]))
    }
}

fn build_error(name: &str, path: &Path, source: std::io::Error) -> DictionaryError {
    DictionaryError::Build {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    }
}
