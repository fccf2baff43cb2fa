//! Zone index: sorted, gap-filled line ranges over a document's commands.
//!
//! Entries are disjoint, sorted, and their union covers every line of the
//! document, `1..=doc_len`. Lines owned by no command are covered by null-key
//! filler zones, including an explicit trailing filler bounded to the
//! document's last line. Point lookup is binary search over the sorted,
//! non-overlapping ranges.

use super::span::{CommandKey, CommandSpan};

/// One contiguous line range, owned by a command or by nobody.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// First line of the range (1-based).
    pub start_line: usize,
    /// Last line of the range, inclusive.
    pub end_line: usize,
    /// Owning command, or `None` for a filler zone.
    pub key: Option<CommandKey>,
}

/// Sorted, disjoint, gap-filled line-range index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneIndex {
    zones: Vec<Zone>,
}

impl ZoneIndex {
    /// Build the index in one linear pass over spans sorted by `start_line`.
    ///
    /// `doc_len` bounds the trailing filler zone; an empty document yields an
    /// empty index.
    pub fn build<'a, I>(spans: I, doc_len: usize) -> Self
    where
        I: IntoIterator<Item = &'a CommandSpan>,
    {
        let mut zones = Vec::new();
        let mut current_line = 1;

        for span in spans {
            if current_line < span.start_line {
                zones.push(Zone {
                    start_line: current_line,
                    end_line: span.start_line - 1,
                    key: None,
                });
            }
            zones.push(Zone {
                start_line: span.start_line,
                end_line: span.zone_end_line,
                key: Some(span.key()),
            });
            current_line = span.zone_end_line + 1;
        }

        if current_line <= doc_len {
            zones.push(Zone {
                start_line: current_line,
                end_line: doc_len,
                key: None,
            });
        }

        Self { zones }
    }

    /// Find the command owning `line`, O(log n) in the number of zones.
    ///
    /// Returns `None` both for filler zones and for lines outside the
    /// document: "no command" is an answer, not an error.
    pub fn key_at_line(&self, line: usize) -> Option<&CommandKey> {
        let mut left = 0;
        let mut right = self.zones.len();

        while left < right {
            let mid = left + (right - left) / 2;
            let zone = &self.zones[mid];
            if line < zone.start_line {
                right = mid;
            } else if line > zone.end_line {
                left = mid + 1;
            } else {
                return zone.key.as_ref();
            }
        }
        None
    }

    /// All zones, sorted by line.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
