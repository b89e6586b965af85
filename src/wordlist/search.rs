//! The binary searches over fixed-width records.
//!
//! Both searches walk byte offsets, not record indices: a probe lands
//! anywhere in the range, is rounded down to the containing record boundary,
//! and the comparator decides which half survives. Each call reads at most
//! `ceil(log2(record_count)) + 1` records.

use std::cmp::Ordering;

use super::cmp;
use super::window::CandidateWindow;

/// Random access to the fixed-width records backing a search.
///
/// The seam keeps the search logic independent of the mapped file so tests
/// can count reads or serve records from memory.
pub(crate) trait RecordSource {
    /// Bytes per record, terminator included. Never zero.
    fn record_width(&self) -> u64;

    /// The record starting at `offset`, stripped of its padding.
    ///
    /// `offset` is always record-aligned. `None` past the end of the data.
    fn record_at(&self, offset: u64) -> Option<&[u8]>;
}

/// Round a byte offset down to the boundary of the record containing it.
pub(crate) fn align_down(offset: u64, width: u64) -> u64 {
    offset / width * width
}

/// One-shot membership test over `window`'s range.
///
/// Works on local copies of the bounds; the caller's window is untouched.
pub(crate) fn find_exact<S: RecordSource>(
    source: &S,
    window: CandidateWindow,
    query: &[u8],
) -> bool {
    let width = source.record_width();
    let mut start = window.start();
    let mut end = window.end();

    while start < end {
        let middle = align_down(start + (end - start) / 2, width);
        match cmp::compare_exact(query, source.record_at(middle)) {
            Ordering::Equal => return true,
            Ordering::Greater => start = middle + width,
            Ordering::Less => end = middle,
        }
    }
    false
}

/// Narrow `window` to the range that could still hold a record with `query`
/// as a prefix.
///
/// `Some` carries the narrowed window (`start` never lower, `end` never
/// higher, same offset); the caller threads it into the next call as the
/// text grows. `None` means no stored word extends the query, and no
/// extension of it can match either, so the caller abandons this starting
/// offset.
pub(crate) fn narrow_prefix<S: RecordSource>(
    source: &S,
    window: CandidateWindow,
    query: &[u8],
) -> Option<CandidateWindow> {
    let width = source.record_width();
    let mut start = window.start();
    let mut end = window.end();

    while start < end {
        let middle = align_down(start + (end - start) / 2, width);
        match cmp::compare_prefix(query, source.record_at(middle)) {
            Ordering::Equal => return Some(CandidateWindow::new(start, end, window.offset())),
            Ordering::Greater => start = middle + width,
            Ordering::Less => end = middle,
        }
    }
    None
}
