//! Scheduling domain models.
//!
//! Core value types for the placement problem: what to schedule
//! (`Meeting`), where it may go (`TimeSlot`), and what came out
//! (`Placement`, `OptimizationResult`).
//!
//! # Time Representation
//!
//! All times are in milliseconds relative to a scheduling epoch the caller
//! defines (e.g. Unix epoch, midnight UTC). Durations are expressed in
//! minutes on `Meeting` because that is the granularity of the upstream API,
//! and converted internally.

mod meeting;
mod placement;
mod slot;

pub use meeting::Meeting;
pub use placement::{OptimizationResult, Placement};
pub use slot::{TimeSlot, MS_PER_HOUR, MS_PER_MINUTE};
