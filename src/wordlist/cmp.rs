//! Record comparators for the binary searches.
//!
//! Both comparators describe how the *query* sorts relative to a stored
//! record: `Less` sends the search toward lower offsets, `Greater` toward
//! higher ones. Comparison is byte-wise with ASCII case folding; non-ASCII
//! bytes compare by raw value. An absent record (a probe past the end of the
//! data) compares as `Less`, the end-of-range sentinel.

use std::cmp::Ordering;

/// Trim the fill bytes a fixed-width record is padded with.
///
/// Everything in the ASCII control/space range (`<= 0x20`) at either end is
/// padding; the terminator byte itself falls in that range.
pub(crate) fn strip_padding(record: &[u8]) -> &[u8] {
    let Some(first) = record.iter().position(|&b| b > 0x20) else {
        return &[];
    };
    // A word exists, so rposition is guaranteed to find it.
    let last = record.iter().rposition(|&b| b > 0x20).unwrap_or(first);
    &record[first..=last]
}

/// Exact lexicographic comparison of `query` against a record.
///
/// A strict prefix sorts before its extensions; equality requires the full
/// lengths to match.
pub(crate) fn compare_exact(query: &[u8], record: Option<&[u8]>) -> Ordering {
    let Some(record) = record else {
        return Ordering::Less;
    };
    for (&q, &r) in query.iter().zip(record.iter()) {
        let ord = q.to_ascii_lowercase().cmp(&r.to_ascii_lowercase());
        if ord != Ordering::Equal {
            return ord;
        }
    }
    query.len().cmp(&record.len())
}

/// Comparison restricted to the query's length.
///
/// `Equal` means the query is a prefix of the record (or the whole record).
/// A record that runs out first is a proper prefix of the query and sorts
/// before it, so the query compares `Greater`. An empty or absent record
/// compares `Less`.
pub(crate) fn compare_prefix(query: &[u8], record: Option<&[u8]>) -> Ordering {
    let record = match record {
        Some(r) if !r.is_empty() => r,
        _ => return Ordering::Less,
    };
    for (i, &q) in query.iter().enumerate() {
        let Some(&r) = record.get(i) else {
            return Ordering::Greater;
        };
        let ord = q.to_ascii_lowercase().cmp(&r.to_ascii_lowercase());
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
