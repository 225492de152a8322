//! Scheduling policies and simulation metrics.
//!
//! Every policy is a pure function from a process list (plus a quantum or a
//! random source where relevant) to a [`SchedulingResult`]. Policies share
//! the remaining-time ledger, the [`Timeline`] builder and the
//! [`Statistics`] reducer, but never each other.
//!
//! # Policies
//!
//! | Family | Policies |
//! |--------|----------|
//! | Non-preemptive | [`fcfs`], [`sjf`], [`ljf`], [`priority`], [`hrrn`], [`edf`], [`multilevel_queue`] |
//! | Preemptive, unit time | [`srtf`], [`lrtf`], [`preemptive_priority`] |
//! | Quantum-based | [`round_robin`], [`multilevel_feedback_queue`] |
//! | Proportional share | [`lottery`], [`fair_share`] |
//!
//! # Input Contract
//! Inputs are expected to be validated (see [`crate::validation`]). The
//! policies still terminate on any input: an empty list yields an empty
//! result and a process without positive burst completes at its arrival.
//!
//! [`SchedulingResult`]: crate::models::SchedulingResult
//! [`Timeline`]: crate::models::Timeline
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fair_share;
mod feedback;
mod kpi;
mod ledger;
mod lottery;
mod non_preemptive;
mod preemptive;
mod round_robin;

pub use fair_share::fair_share;
pub use feedback::multilevel_feedback_queue;
pub use kpi::{format_average, ScheduleKpi, Statistics};
pub use lottery::{lottery, TicketSource};
pub use non_preemptive::{
    edf, fcfs, hrrn, ljf, multilevel_queue, priority, run_to_completion, sjf,
};
pub use preemptive::{lrtf, preemptive_priority, run_unit_preemptive, srtf};
pub use round_robin::{round_robin, DEFAULT_QUANTUM};
