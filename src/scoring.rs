//! Weighted desirability scoring.
//!
//! One formula serves two call sites: a *ranking* score (reference time =
//! now) used to order meetings before placement, and a *placement* score
//! (reference time = candidate start) used to pick among candidate slots
//! for one meeting. Only the reference time differs.
//!
//! # Components
//!
//! Each component is bounded [0, 1]; the total is their weighted sum.
//!
//! - **Priority**: `priority / 10`
//! - **Deadline urgency**: piecewise-linear decay in fractional hours
//!   remaining; a closer deadline scores higher. Within 24 h the score is
//!   0.9..1.0, within a week 0.5..0.9, then it tapers to 0.0 at 504 h
//!   (three weeks). A passed deadline saturates at 1.0; no deadline
//!   scores 0.0.
//! - **Duration shortness**: `1 - min(duration / cap, 1)` with a 240-minute
//!   cap; shorter meetings score higher.

use serde::{Deserialize, Serialize};

use crate::models::{Meeting, MS_PER_HOUR};

/// Horizon (hours) below which a deadline is maximally urgent.
pub const URGENT_HORIZON_HOURS: f64 = 24.0;

/// Horizon (hours) of the mid-urgency regime (one week).
pub const NEAR_HORIZON_HOURS: f64 = 168.0;

/// Horizon (hours) beyond which the urgency component floors at 0.
pub const URGENCY_FLOOR_HOURS: f64 = 504.0;

/// Relative weights of the three score components.
///
/// Expected to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the priority component.
    pub priority: f64,
    /// Weight of the deadline-urgency component.
    pub deadline: f64,
    /// Weight of the duration-shortness component.
    pub duration: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            priority: 0.5,
            deadline: 0.3,
            duration: 0.2,
        }
    }
}

/// Scoring configuration: component weights and the duration cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Component weights.
    pub weights: ScoreWeights,
    /// Duration (minutes) at or beyond which the shortness component is 0.
    pub duration_cap_minutes: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            duration_cap_minutes: 240,
        }
    }
}

/// Per-component weighted score values for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Weighted priority contribution.
    pub priority: f64,
    /// Weighted deadline-urgency contribution.
    pub deadline: f64,
    /// Weighted duration-shortness contribution.
    pub duration: f64,
    /// Total score.
    pub total: f64,
}

/// Evaluates meeting desirability at a reference time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Creates a scorer with default weights and caps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scorer with a custom configuration.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a meeting at the given reference time (ms).
    ///
    /// Pass "now" to rank meetings against each other, or a candidate start
    /// time to score a specific placement.
    pub fn score(&self, meeting: &Meeting, at_ms: i64) -> f64 {
        self.breakdown(meeting, at_ms).total
    }

    /// Scores a meeting and exposes the weighted component values.
    pub fn breakdown(&self, meeting: &Meeting, at_ms: i64) -> ScoreBreakdown {
        let w = &self.config.weights;
        let priority = self.priority_component(meeting) * w.priority;
        let deadline = self.urgency_component(meeting, at_ms) * w.deadline;
        let duration = self.duration_component(meeting) * w.duration;
        ScoreBreakdown {
            priority,
            deadline,
            duration,
            total: priority + deadline + duration,
        }
    }

    fn priority_component(&self, meeting: &Meeting) -> f64 {
        (meeting.priority as f64 / 10.0).clamp(0.0, 1.0)
    }

    /// Deadline urgency at `at_ms`, strictly decreasing in hours remaining.
    ///
    /// Fractional hours keep the curve strictly monotonic, which makes the
    /// slot search prefer the latest feasible start within a window.
    fn urgency_component(&self, meeting: &Meeting, at_ms: i64) -> f64 {
        let deadline_ms = match meeting.deadline_ms {
            Some(d) => d,
            None => return 0.0,
        };
        if deadline_ms <= at_ms {
            // Already past due: maximally urgent
            return 1.0;
        }

        let hours = (deadline_ms - at_ms) as f64 / MS_PER_HOUR as f64;
        if hours <= URGENT_HORIZON_HOURS {
            0.9 + 0.1 * (1.0 - hours / URGENT_HORIZON_HOURS)
        } else if hours <= NEAR_HORIZON_HOURS {
            let span = NEAR_HORIZON_HOURS - URGENT_HORIZON_HOURS;
            0.5 + 0.4 * (1.0 - (hours - URGENT_HORIZON_HOURS) / span)
        } else {
            let span = URGENCY_FLOOR_HOURS - NEAR_HORIZON_HOURS;
            (0.5 * (1.0 - (hours - NEAR_HORIZON_HOURS) / span)).max(0.0)
        }
    }

    fn duration_component(&self, meeting: &Meeting) -> f64 {
        let cap = self.config.duration_cap_minutes as f64;
        1.0 - (meeting.duration_minutes as f64 / cap).min(1.0)
    }
}
