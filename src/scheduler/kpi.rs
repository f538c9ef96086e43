//! Run quality metrics (KPIs).
//!
//! Summarizes one optimization run for callers that report or threshold
//! on schedule quality.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled Rate | placed / total meetings |
//! | Mean Score | Aggregate placement score (same as the result's) |
//! | Scheduled Minutes | Sum of committed durations |
//! | Utilization | Committed time / total valid availability |

use crate::models::{Meeting, OptimizationResult, TimeSlot, MS_PER_MINUTE};

/// Quality indicators for one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationKpi {
    /// Number of meetings committed.
    pub scheduled_count: usize,
    /// Number of meetings left unscheduled.
    pub unscheduled_count: usize,
    /// Fraction of meetings committed (1.0 when there were none).
    pub scheduled_rate: f64,
    /// Mean committed placement score (0.0 when nothing was placed).
    pub mean_score: f64,
    /// Total committed time in minutes.
    pub scheduled_minutes: i64,
    /// Committed time as a fraction of total valid availability
    /// (0.0 when there is no availability).
    pub utilization: f64,
}

impl OptimizationKpi {
    /// Computes KPIs from a run's result and its inputs.
    pub fn calculate(
        result: &OptimizationResult,
        meetings: &[Meeting],
        windows: &[TimeSlot],
    ) -> Self {
        let scheduled_count = result.placement_count();
        let unscheduled_count = meetings.len().saturating_sub(scheduled_count);

        let scheduled_rate = if meetings.is_empty() {
            1.0
        } else {
            scheduled_count as f64 / meetings.len() as f64
        };

        let scheduled_ms = result.total_scheduled_ms();
        let available_ms: i64 = windows
            .iter()
            .filter(|w| w.is_valid())
            .map(TimeSlot::duration_ms)
            .sum();
        let utilization = if available_ms > 0 {
            scheduled_ms as f64 / available_ms as f64
        } else {
            0.0
        };

        Self {
            scheduled_count,
            unscheduled_count,
            scheduled_rate,
            mean_score: result.score,
            scheduled_minutes: scheduled_ms / MS_PER_MINUTE,
            utilization,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_scheduled_rate: f64, min_mean_score: f64) -> bool {
        self.scheduled_rate >= min_scheduled_rate && self.mean_score >= min_mean_score
    }
}
