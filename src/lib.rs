//! Greedy meeting placement for a single calendar.
//!
//! Assigns pending meetings (priority, duration, deadline) into open
//! availability windows, producing a conflict-free schedule that favors
//! high-priority, urgent, short meetings. The heuristic is a single greedy
//! pass: rank by weighted score, then commit each meeting to its
//! best-scoring free slot, never revisiting earlier commitments.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Meeting`, `TimeSlot`, `Placement`,
//!   `OptimizationResult`)
//! - **`scoring`**: Weighted desirability score (priority, deadline urgency,
//!   duration shortness)
//! - **`scheduler`**: Slot search, the greedy placement loop, and KPIs
//! - **`validation`**: Input integrity checks for callers feeding the engine
//!
//! # Determinism
//!
//! The engine never reads a wall clock; the reference time is always an
//! argument. Identical inputs yield identical output.
//!
//! # Reference
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4:
//!   Priority Dispatching

pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod validation;
