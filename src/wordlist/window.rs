//! The search window threaded through successive narrowing calls.

/// The byte-offset range `[start, end)` still able to contain a match,
/// together with the password offset the search sequence was started for.
///
/// A window is created once per starting offset via
/// [`FileDictionary::initial_window`](super::FileDictionary::initial_window),
/// threaded through successive [`narrow`](super::FileDictionary::narrow)
/// calls as the candidate text grows, and finally handed to
/// [`is_match`](super::FileDictionary::is_match) to confirm a complete word.
/// Narrowing never widens a window: `start` only increases and `end` only
/// decreases across the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateWindow {
    start: u64,
    end: u64,
    offset: usize,
}

impl CandidateWindow {
    pub(crate) fn new(start: u64, end: u64, offset: usize) -> Self {
        Self { start, end, offset }
    }

    /// First byte offset a match could still start at.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Exclusive upper byte offset of the range.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// The starting text offset this window was created for.
    ///
    /// Carried for the caller's bookkeeping; the search itself never reads it.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True when the range can no longer contain any record.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
