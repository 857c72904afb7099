//! Result types for event-indexed scans
//!
//! Event queries are bounded, so a scan can miss older entries. Every scan
//! result says whether that may have happened instead of failing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// Every matching event was inside the scanned window
    Complete,
    /// The window was full; older matching events may exist
    PossiblyPartial,
}

/// How much of the event stream a scan looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanWindow {
    /// Events requested per stream
    pub page_size: usize,
    /// Events the ledger actually returned, across all streams
    pub events_scanned: usize,
}

/// Items produced by a scan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult<T> {
    pub items: Vec<T>,
    pub completeness: Completeness,
    pub window: ScanWindow,
    /// Matching events that produced no item: the object is gone or the
    /// payload could not be decoded
    pub skipped: usize,
}

impl<T> ScanResult<T> {
    pub fn is_complete(&self) -> bool {
        self.completeness == Completeness::Complete
    }
}

/// A single stream returning a full page may have more behind it
pub fn completeness_of(page_size: usize, returned: usize) -> Completeness {
    if returned >= page_size {
        Completeness::PossiblyPartial
    } else {
        Completeness::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_page_is_possibly_partial() {
        assert_eq!(completeness_of(2, 2), Completeness::PossiblyPartial);
        assert_eq!(completeness_of(2, 1), Completeness::Complete);
        assert_eq!(completeness_of(1000, 0), Completeness::Complete);
    }
}
