//! Greedy placement engine and quality metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` ranks meetings by weighted score, then commits each
//! one, in order, to the best-scoring conflict-free slot found by
//! `find_best_slot`. Single pass, no backtracking: fast and deterministic,
//! not optimal.
//!
//! # KPI
//!
//! `OptimizationKpi` summarizes a run: scheduled rate, mean placement
//! score, and availability utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod greedy;
mod kpi;
mod search;

pub use greedy::GreedyScheduler;
pub use kpi::OptimizationKpi;
pub use search::{find_best_slot, SLOT_STEP_MINUTES};
