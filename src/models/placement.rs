//! Placement (solution) model.
//!
//! A placement commits one meeting to a concrete start/end time together
//! with the score that slot achieved. An optimization result is the ordered
//! list of commitments from one greedy run plus the aggregate score.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A committed assignment of one meeting to a concrete time interval.
///
/// Created only when a meeting is successfully placed; one meeting yields
/// at most one placement per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed meeting's ID.
    pub meeting_id: String,
    /// The placed meeting's title (denormalized for display).
    pub title: String,
    /// Committed start time (ms).
    pub start_ms: i64,
    /// Committed end time (ms).
    pub end_ms: i64,
    /// Placement score achieved at the committed start time.
    pub score: f64,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        meeting_id: impl Into<String>,
        title: impl Into<String>,
        start_ms: i64,
        end_ms: i64,
        score: f64,
    ) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            title: title.into(),
            start_ms,
            end_ms,
            score,
        }
    }

    /// Committed duration (end - start) in ms.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// The committed interval as a time slot.
    #[inline]
    pub fn interval(&self) -> TimeSlot {
        TimeSlot::new(self.start_ms, self.end_ms)
    }
}

/// Result of one greedy optimization run.
///
/// Placing 0..N of N meetings is a valid outcome; meetings that found no
/// feasible slot are listed in `unscheduled` rather than reported as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Committed placements, in commit order (highest-ranked first).
    pub placements: Vec<Placement>,
    /// IDs of meetings that could not be placed.
    pub unscheduled: Vec<String>,
    /// Arithmetic mean of committed placement scores; 0.0 when empty.
    pub score: f64,
}

impl OptimizationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the placement for a given meeting.
    pub fn placement_for(&self, meeting_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.meeting_id == meeting_id)
    }

    /// Number of committed placements.
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Total committed time (ms).
    pub fn total_scheduled_ms(&self) -> i64 {
        self.placements.iter().map(|p| p.duration_ms()).sum()
    }

    /// Whether no pair of committed intervals overlaps.
    pub fn is_conflict_free(&self) -> bool {
        for (i, a) in self.placements.iter().enumerate() {
            for b in &self.placements[i + 1..] {
                if a.interval().overlaps(&b.interval()) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> OptimizationResult {
        OptimizationResult {
            placements: vec![
                Placement::new("m1", "Standup", 0, 900_000, 0.8),
                Placement::new("m2", "Review", 900_000, 2_700_000, 0.6),
            ],
            unscheduled: vec!["m3".into()],
            score: 0.7,
        }
    }

    #[test]
    fn test_placement_duration() {
        let p = Placement::new("m1", "Standup", 0, 900_000, 0.8);
        assert_eq!(p.duration_ms(), 900_000);
        assert_eq!(p.interval(), TimeSlot::new(0, 900_000));
    }

    #[test]
    fn test_result_queries() {
        let r = sample_result();
        assert_eq!(r.placement_count(), 2);
        assert_eq!(r.total_scheduled_ms(), 2_700_000);
        assert_eq!(r.placement_for("m2").unwrap().title, "Review");
        assert!(r.placement_for("m3").is_none());
        assert_eq!(r.unscheduled, vec!["m3".to_string()]);
    }

    #[test]
    fn test_conflict_free() {
        let r = sample_result();
        // Back-to-back intervals do not conflict
        assert!(r.is_conflict_free());

        let mut bad = sample_result();
        bad.placements
            .push(Placement::new("m4", "Clash", 600_000, 1_200_000, 0.5));
        assert!(!bad.is_conflict_free());
    }

    #[test]
    fn test_empty_result() {
        let r = OptimizationResult::new();
        assert_eq!(r.placement_count(), 0);
        assert_eq!(r.total_scheduled_ms(), 0);
        assert!(r.is_conflict_free());
        assert_eq!(r.score, 0.0);
    }
}
