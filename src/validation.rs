//! Input validation for the placement engine.
//!
//! The engine assumes well-formed input; callers run these checks before
//! handing meetings and windows over. Detects:
//! - Duplicate meeting IDs
//! - Non-positive durations
//! - Priorities outside 1..=10
//! - Windows with `end <= start`
//! - Deadlines at or before the reference time
//! - Deadlines too tight to ever fit the duration

use crate::models::{Meeting, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two meetings share the same ID.
    DuplicateId,
    /// A meeting's duration is zero or negative.
    NonPositiveDuration,
    /// A meeting's priority lies outside 1..=10.
    PriorityOutOfRange,
    /// A window's end is at or before its start.
    EmptyWindow,
    /// A deadline is at or before the reference time.
    DeadlinePassed,
    /// A deadline leaves less room than the meeting's own duration.
    ImpossibleDeadline,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates engine input against the reference time `now_ms`.
///
/// All detected issues are returned together so callers can report them in
/// one pass rather than fixing them one at a time.
pub fn validate_input(meetings: &[Meeting], windows: &[TimeSlot], now_ms: i64) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    for m in meetings {
        if !seen_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate meeting ID: {}", m.id),
            ));
        }

        if m.duration_minutes <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Meeting '{}' has non-positive duration {} min",
                    m.id, m.duration_minutes
                ),
            ));
        }

        if !(1..=10).contains(&m.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!("Meeting '{}' has priority {} outside 1..=10", m.id, m.priority),
            ));
        }

        if let Some(deadline_ms) = m.deadline_ms {
            if deadline_ms <= now_ms {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DeadlinePassed,
                    format!("Meeting '{}' deadline is not in the future", m.id),
                ));
            } else if m.duration_minutes > 0 && deadline_ms - now_ms < m.duration_ms() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ImpossibleDeadline,
                    format!(
                        "Meeting '{}' cannot finish before its deadline even if started now",
                        m.id
                    ),
                ));
            }
        }
    }

    for w in windows {
        if !w.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWindow,
                format!("Window [{}, {}) has end <= start", w.start_ms, w.end_ms),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
