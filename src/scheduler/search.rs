//! Best-slot search for a single meeting.
//!
//! Walks every availability window at a fixed step and keeps the
//! conflict-free candidate with the highest placement score. Pure over its
//! inputs: the occupied set is only read.
//!
//! # Slot Preference
//!
//! The placement score's urgency component strictly decreases with hours
//! remaining until the deadline, so within one window the search settles on
//! the **latest** feasible start (closest to the deadline). For meetings
//! without a deadline every candidate scores the same and the first one
//! (earliest start, first window) wins.

use crate::models::{Meeting, Placement, TimeSlot, MS_PER_MINUTE};
use crate::scoring::Scorer;

/// Candidate step between start times within a window (minutes).
pub const SLOT_STEP_MINUTES: i64 = 15;

/// Finds the best conflict-free placement for one meeting.
///
/// For every window, candidate start times are tried from the window start
/// in `step_minutes` increments while the implied end stays inside the
/// window. The walk stops early in a window once the implied end passes
/// the deadline, since no later start there can comply. Candidates overlapping
/// an occupied interval are skipped. A strictly higher score replaces the
/// running best; exact ties keep the first candidate seen.
///
/// Returns `None` when no window yields a feasible, conflict-free candidate.
pub fn find_best_slot(
    meeting: &Meeting,
    windows: &[TimeSlot],
    occupied: &[TimeSlot],
    scorer: &Scorer,
    step_minutes: i64,
) -> Option<Placement> {
    let duration_ms = meeting.duration_ms();
    if duration_ms <= 0 || step_minutes <= 0 {
        return None;
    }
    let step_ms = step_minutes * MS_PER_MINUTE;

    let mut best: Option<Placement> = None;

    for window in windows {
        // Malformed windows are skipped rather than searched
        if !window.is_valid() {
            continue;
        }

        let mut start_ms = window.start_ms;
        loop {
            let end_ms = start_ms + duration_ms;
            if end_ms > window.end_ms {
                break;
            }
            if let Some(deadline_ms) = meeting.deadline_ms {
                // Time only moves forward: once the implied end passes the
                // deadline, no later start in this window can comply.
                if end_ms > deadline_ms {
                    break;
                }
            }

            let candidate = TimeSlot::new(start_ms, end_ms);
            if !occupied.iter().any(|o| o.overlaps(&candidate)) {
                let score = scorer.score(meeting, start_ms);
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Placement::new(
                        &meeting.id,
                        &meeting.title,
                        start_ms,
                        end_ms,
                        score,
                    ));
                }
            }

            start_ms += step_ms;
        }
    }

    best
}
