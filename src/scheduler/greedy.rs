//! Greedy placement loop.
//!
//! # Algorithm
//!
//! 1. Score every meeting at `now_ms` and sort descending (ties: earlier
//!    deadline first, deadline-bearing before deadline-free).
//! 2. For each meeting in order, search all windows for its best
//!    conflict-free slot against the occupied intervals committed so far.
//! 3. Commit the winner and grow the occupied set; meetings with no
//!    feasible slot are reported as unscheduled, never as errors.
//!
//! Committed intervals are never revisited: a single pass, O(meetings x
//! windows x window-length / step).

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::models::{Meeting, OptimizationResult, TimeSlot};
use crate::scoring::{Scorer, ScoringConfig};

use super::search::{find_best_slot, SLOT_STEP_MINUTES};

/// Scores closer than this are treated as tied during ranking.
const SCORE_EPSILON: f64 = 1e-9;

/// Greedy single-pass meeting scheduler.
///
/// # Example
///
/// ```
/// use slotwise::models::{Meeting, TimeSlot, MS_PER_HOUR};
/// use slotwise::scheduler::GreedyScheduler;
///
/// let meetings = vec![Meeting::new("m1")
///     .with_priority(8)
///     .with_duration(60)
///     .with_deadline(20 * MS_PER_HOUR)];
/// let windows = vec![TimeSlot::new(9 * MS_PER_HOUR, 17 * MS_PER_HOUR)];
///
/// let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
/// assert_eq!(result.placement_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    scorer: Scorer,
    step_minutes: i64,
}

impl GreedyScheduler {
    /// Creates a scheduler with default scoring and a 15-minute step.
    pub fn new() -> Self {
        Self {
            scorer: Scorer::new(),
            step_minutes: SLOT_STEP_MINUTES,
        }
    }

    /// Sets the scoring configuration.
    pub fn with_scoring(mut self, config: ScoringConfig) -> Self {
        self.scorer = Scorer::with_config(config);
        self
    }

    /// Sets the candidate step between start times (minutes).
    pub fn with_step_minutes(mut self, minutes: i64) -> Self {
        self.step_minutes = minutes;
        self
    }

    /// Returns the scorer in use.
    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Places meetings into availability windows.
    ///
    /// `now_ms` is the ranking reference time; the engine reads no wall
    /// clock of its own. Empty inputs yield an empty result; partial or
    /// zero placement is a normal outcome.
    pub fn optimize(
        &self,
        meetings: &[Meeting],
        windows: &[TimeSlot],
        now_ms: i64,
    ) -> OptimizationResult {
        let mut result = OptimizationResult::new();
        let mut occupied: Vec<TimeSlot> = Vec::new();

        for &idx in &self.rank(meetings, now_ms) {
            let meeting = &meetings[idx];
            match find_best_slot(meeting, windows, &occupied, &self.scorer, self.step_minutes) {
                Some(placement) => {
                    debug!(
                        meeting = %meeting.id,
                        start_ms = placement.start_ms,
                        end_ms = placement.end_ms,
                        score = placement.score,
                        "placed"
                    );
                    occupied.push(placement.interval());
                    result.placements.push(placement);
                }
                None => {
                    debug!(meeting = %meeting.id, "no feasible slot");
                    result.unscheduled.push(meeting.id.clone());
                }
            }
        }

        result.score = if result.placements.is_empty() {
            0.0
        } else {
            let sum: f64 = result.placements.iter().map(|p| p.score).sum();
            sum / result.placements.len() as f64
        };

        info!(
            placed = result.placement_count(),
            unscheduled = result.unscheduled.len(),
            score = result.score,
            "optimization complete"
        );
        result
    }

    /// Returns meeting indices in placement order.
    ///
    /// Descending by ranking score; near-ties fall through to the deadline
    /// comparison. The sort is stable, so otherwise-equal meetings keep
    /// their input order.
    fn rank(&self, meetings: &[Meeting], now_ms: i64) -> Vec<usize> {
        let scores: Vec<f64> = meetings
            .iter()
            .map(|m| self.scorer.score(m, now_ms))
            .collect();

        let mut indices: Vec<usize> = (0..meetings.len()).collect();
        indices.sort_by(|&a, &b| {
            if (scores[a] - scores[b]).abs() > SCORE_EPSILON {
                scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal)
            } else {
                compare_deadlines(meetings[a].deadline_ms, meetings[b].deadline_ms)
            }
        });
        indices
    }
}

/// Earlier deadline first; a deadline sorts before no deadline.
fn compare_deadlines(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MS_PER_HOUR, MS_PER_MINUTE};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn hour(h: i64) -> i64 {
        h * MS_PER_HOUR
    }

    fn meeting(id: &str, priority: i32, minutes: i64, deadline_ms: Option<i64>) -> Meeting {
        let mut m = Meeting::new(id)
            .with_priority(priority)
            .with_duration(minutes);
        m.deadline_ms = deadline_ms;
        m
    }

    #[test]
    fn test_single_meeting_lands_latest_feasible() {
        // One 09:00-17:00 window, priority 10, 60 min, deadline 23:59.
        // The urgency curve strictly prefers starts closer to the deadline,
        // so the committed slot is 16:00-17:00, not the window start.
        let meetings = vec![meeting(
            "m1",
            10,
            60,
            Some(hour(23) + 59 * MS_PER_MINUTE),
        )];
        let windows = vec![TimeSlot::new(hour(9), hour(17))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        assert_eq!(result.placement_count(), 1);
        let p = result.placement_for("m1").unwrap();
        assert_eq!(p.start_ms, hour(16));
        assert_eq!(p.end_ms, hour(17));
        assert_eq!(p.duration_ms(), 60 * MS_PER_MINUTE);
        assert!(result.unscheduled.is_empty());
        assert!((result.score - p.score).abs() < 1e-12);
    }

    #[test]
    fn test_contention_favors_higher_priority() {
        // Two 60-min meetings, one 60-min window: priority 8 wins, 3 loses.
        let meetings = vec![
            meeting("low", 3, 60, Some(hour(12))),
            meeting("high", 8, 60, Some(hour(12))),
        ];
        let windows = vec![TimeSlot::new(hour(9), hour(10))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        assert_eq!(result.placement_count(), 1);
        assert!(result.placement_for("high").is_some());
        assert!(result.placement_for("low").is_none());
        assert_eq!(result.unscheduled, vec!["low".to_string()]);
    }

    #[test]
    fn test_later_meeting_respects_earlier_commitments() {
        // Both want the latest slot before the 11:00 deadline; the
        // higher-priority one takes it, the other backs off to 09:00.
        let meetings = vec![
            meeting("second", 5, 60, Some(hour(11))),
            meeting("first", 10, 60, Some(hour(11))),
        ];
        let windows = vec![TimeSlot::new(hour(9), hour(11))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        assert_eq!(result.placement_count(), 2);
        let first = result.placement_for("first").unwrap();
        let second = result.placement_for("second").unwrap();
        assert_eq!(first.start_ms, hour(10));
        assert_eq!(second.start_ms, hour(9));
        assert!(result.is_conflict_free());
    }

    #[test]
    fn test_oversized_meeting_is_skipped_not_fatal() {
        let meetings = vec![
            meeting("giant", 10, 90, Some(hour(20))),
            meeting("small", 2, 30, Some(hour(20))),
        ];
        let windows = vec![TimeSlot::new(hour(9), hour(10))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        // The giant ranks first but fits nowhere; the small one still lands.
        assert_eq!(result.placement_count(), 1);
        assert!(result.placement_for("small").is_some());
        assert_eq!(result.unscheduled, vec!["giant".to_string()]);
    }

    #[test]
    fn test_empty_inputs() {
        let scheduler = GreedyScheduler::new();
        let windows = vec![TimeSlot::new(hour(9), hour(17))];
        let meetings = vec![meeting("m1", 5, 60, None)];

        let r1 = scheduler.optimize(&[], &windows, 0);
        assert_eq!(r1.placement_count(), 0);
        assert_eq!(r1.score, 0.0);

        let r2 = scheduler.optimize(&meetings, &[], 0);
        assert_eq!(r2.placement_count(), 0);
        assert_eq!(r2.score, 0.0);
        assert_eq!(r2.unscheduled, vec!["m1".to_string()]);
    }

    #[test]
    fn test_score_tie_broken_by_earlier_deadline() {
        // Both deadlines sit past the urgency floor, so ranking scores tie
        // exactly; the earlier deadline must be placed first.
        let meetings = vec![
            meeting("later", 5, 60, Some(hour(700))),
            meeting("sooner", 5, 60, Some(hour(600))),
        ];
        let windows = vec![TimeSlot::new(hour(9), hour(10))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        assert!(result.placement_for("sooner").is_some());
        assert_eq!(result.unscheduled, vec!["later".to_string()]);
    }

    #[test]
    fn test_deadline_bearing_sorts_before_deadline_free() {
        let meetings = vec![
            meeting("free", 5, 60, None),
            meeting("bound", 5, 60, Some(hour(600))), // past the floor → same score
        ];
        let windows = vec![TimeSlot::new(hour(9), hour(10))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        assert!(result.placement_for("bound").is_some());
        assert_eq!(result.unscheduled, vec!["free".to_string()]);
    }

    #[test]
    fn test_deterministic_over_repeated_runs() {
        let meetings = vec![
            meeting("a", 7, 45, Some(hour(30))),
            meeting("b", 7, 45, Some(hour(30))),
            meeting("c", 4, 90, None),
        ];
        let windows = vec![
            TimeSlot::new(hour(9), hour(12)),
            TimeSlot::new(hour(14), hour(18)),
        ];
        let scheduler = GreedyScheduler::new();

        let r1 = scheduler.optimize(&meetings, &windows, 0);
        let r2 = scheduler.optimize(&meetings, &windows, 0);
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_aggregate_is_mean_of_placement_scores() {
        let meetings = vec![
            meeting("a", 9, 30, Some(hour(10))),
            meeting("b", 2, 120, None),
        ];
        let windows = vec![TimeSlot::new(hour(0), hour(8))];

        let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);
        assert_eq!(result.placement_count(), 2);
        let expected: f64 =
            result.placements.iter().map(|p| p.score).sum::<f64>() / 2.0;
        assert!((result.score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_coarser_step_still_fits() {
        let meetings = vec![meeting("m1", 5, 60, Some(hour(12)))];
        let windows = vec![TimeSlot::new(hour(9), hour(11))];

        let result = GreedyScheduler::new()
            .with_step_minutes(30)
            .optimize(&meetings, &windows, 0);
        let p = result.placement_for("m1").unwrap();
        // Candidates at 09:00, 09:30, 10:00; latest compliant wins
        assert_eq!(p.start_ms, hour(10));
    }

    #[test]
    fn test_randomized_inputs_hold_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..20 {
            let meetings: Vec<Meeting> = (0..30)
                .map(|i| {
                    let deadline = if rng.random_range(0..4) == 0 {
                        None
                    } else {
                        Some(rng.random_range(hour(1)..hour(504)))
                    };
                    meeting(
                        &format!("m{i}"),
                        rng.random_range(1..=10),
                        15 * rng.random_range(1..=8),
                        deadline,
                    )
                })
                .collect();

            let windows: Vec<TimeSlot> = (0..5)
                .map(|_| {
                    let start = rng.random_range(0..hour(160));
                    let len = rng.random_range(hour(1)..hour(8));
                    TimeSlot::new(start, start + len)
                })
                .collect();

            let result = GreedyScheduler::new().optimize(&meetings, &windows, 0);

            assert!(result.is_conflict_free());
            assert_eq!(
                result.placement_count() + result.unscheduled.len(),
                meetings.len()
            );
            for p in &result.placements {
                let m = meetings.iter().find(|m| m.id == p.meeting_id).unwrap();
                // Duration fidelity
                assert_eq!(p.duration_ms(), m.duration_ms());
                // Deadline compliance
                if let Some(deadline) = m.deadline_ms {
                    assert!(p.end_ms <= deadline);
                }
                // Every placement lies inside some availability window
                assert!(windows
                    .iter()
                    .any(|w| p.start_ms >= w.start_ms && p.end_ms <= w.end_ms));
            }
        }
    }
}
