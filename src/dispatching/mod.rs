//! Selection rules and the selector that applies them.
//!
//! Every selection-based policy (FCFS, SJF, HRRN, SRTF, …) is the same
//! simulation loop parameterised by a [`SelectionRule`] that scores ready
//! processes. The [`Selector`] picks the best-scoring candidate and breaks
//! ties by input order.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::dispatching::{rules, Candidate, SchedulingContext, Selector};
//! use u_cpu_schedule::models::Process;
//!
//! let procs = vec![Process::new("P1", 0, 6), Process::new("P2", 0, 2)];
//! let candidates = procs.iter().enumerate().map(|(index, process)| Candidate {
//!     index,
//!     process,
//!     remaining: process.burst_time,
//! });
//!
//! let selector = Selector::new(rules::ShortestJob);
//! assert_eq!(selector.select(candidates, &SchedulingContext::at_time(0)), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::{Candidate, SchedulingContext};
pub use engine::{Selector, TieBreaker};

use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = f64;

/// A rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that favour large values
/// (LJF, HRRN, LRTF) negate them.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "EDF").
    fn name(&self) -> &'static str;

    /// Scores a candidate at the current simulation time.
    fn evaluate(&self, candidate: &Candidate<'_>, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
