//! Time slot model.
//!
//! One type covers both availability windows (time the calendar owner is
//! free) and occupied intervals (time already committed during a run);
//! both are plain half-open ranges with the same overlap algebra.

use serde::{Deserialize, Serialize};

/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// A time interval [start, end).
///
/// Half-open: includes start, excludes end. Touching endpoints do not
/// count as overlap, so back-to-back placements are conflict-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this slot (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this slot.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two slots overlap.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `NOT (e1 <= s2 OR s1 >= e2)`.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }

    /// Whether an interval of `duration_ms` fits inside this slot.
    #[inline]
    pub fn fits(&self, duration_ms: i64) -> bool {
        duration_ms > 0 && self.duration_ms() >= duration_ms
    }

    /// Whether this slot is well-formed (`start < end`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start_ms < self.end_ms
    }
}
