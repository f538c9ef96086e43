//! Meeting model.
//!
//! A meeting is the unit of work handed to the engine: a priority, a
//! duration, and an optional completion deadline. The engine only ever
//! reads these fields; status transitions (pending → scheduled) belong to
//! the caller.

use serde::{Deserialize, Serialize};

use super::MS_PER_MINUTE;

/// A pending meeting to be placed into the calendar.
///
/// Immutable once handed to the engine. Field names follow the upstream
/// API wire format (`duration_minutes`, `deadline_ms`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique meeting identifier.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Scheduling priority, 1 (lowest) to 10 (highest).
    pub priority: i32,
    /// Duration in minutes (positive).
    pub duration_minutes: i64,
    /// Latest completion time (ms). `None` = no deadline.
    #[serde(default)]
    pub deadline_ms: Option<i64>,
}

impl Meeting {
    /// Creates a meeting with the given ID, priority 1 and zero duration.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            priority: 1,
            duration_minutes: 0,
            deadline_ms: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the priority (1..=10).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the duration in minutes.
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the deadline (latest completion time in ms).
    pub fn with_deadline(mut self, deadline_ms: i64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    /// Duration in milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.duration_minutes * MS_PER_MINUTE
    }

    /// Whether this meeting carries a deadline.
    #[inline]
    pub fn has_deadline(&self) -> bool {
        self.deadline_ms.is_some()
    }
}
