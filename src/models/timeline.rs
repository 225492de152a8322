//! Execution timeline (Gantt chart) model and builder.
//!
//! A timeline is an ordered list of contiguous intervals attributing CPU
//! time to a process or to idle. [`Timeline`] enforces the invariants while
//! a policy emits work:
//!
//! - entries never overlap and never leave gaps (gaps become [`IDLE`]),
//! - consecutive unit emissions of the same process coalesce into one entry,
//! - consecutive idle stretches coalesce into one entry.

use serde::{Deserialize, Serialize};

/// Name used for idle CPU intervals.
pub const IDLE: &str = "Idle";

/// A single timeline interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process name, or [`IDLE`].
    pub name: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Creates an idle entry.
    pub fn idle(start: i64, end: i64) -> Self {
        Self::new(IDLE, start, end)
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this entry is idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.name == IDLE
    }
}

/// Incremental timeline builder.
///
/// The builder tracks its own end time; every emission must start at or
/// after it. Emissions that start later than the current end get an idle
/// entry inserted in front of them.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline starting at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// End of the last entry (0 when empty).
    pub fn end(&self) -> i64 {
        self.entries.last().map(|e| e.end).unwrap_or(0)
    }

    /// Appends a dispatch of `name` over `[start, end)` as its own entry.
    ///
    /// Used by policies where each dispatch is a distinct slice (run to
    /// completion, or one quantum). Empty intervals are ignored.
    pub fn push(&mut self, name: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        debug_assert!(start >= self.end(), "timeline emissions must not overlap");
        self.idle_until(start);
        self.entries.push(TimelineEntry::new(name, start, end));
    }

    /// Records one unit of `name` starting at `at`.
    ///
    /// Extends the last entry when it belongs to the same process and ends
    /// exactly at `at`; otherwise opens a new entry.
    pub fn run_unit(&mut self, name: &str, at: i64) {
        debug_assert!(at >= self.end(), "timeline emissions must not overlap");
        self.idle_until(at);
        match self.entries.last_mut() {
            Some(last) if last.name == name && last.end == at => last.end += 1,
            _ => self.entries.push(TimelineEntry::new(name, at, at + 1)),
        }
    }

    /// Fills the gap between the current end and `time` with idle.
    pub fn idle_until(&mut self, time: i64) {
        let end = self.end();
        if time <= end {
            return;
        }
        match self.entries.last_mut() {
            Some(last) if last.is_idle() => last.end = time,
            _ => self.entries.push(TimelineEntry::idle(end, time)),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowed view of the entries.
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Consumes the builder.
    pub fn into_entries(self) -> Vec<TimelineEntry> {
        self.entries
    }
}

/// Whether `entries` is contiguous and well-formed.
///
/// Checks `end > start >= 0` for every entry and
/// `entries[i].end == entries[i + 1].start` for every adjacent pair.
pub fn is_contiguous(entries: &[TimelineEntry]) -> bool {
    entries.iter().all(|e| e.start >= 0 && e.end > e.start)
        && entries.windows(2).all(|w| w[0].end == w[1].start)
}
