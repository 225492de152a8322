//! CPU scheduling simulation.
//!
//! Simulates how a single CPU would execute a set of processes under
//! classic scheduling policies and reports a Gantt timeline together with
//! per-process turnaround and waiting times.
//!
//! # Modules
//!
//! - **`models`**: Data contract: `Process`, `Timeline`, `TimelineEntry`,
//!   `ProcessResult`, `SchedulingResult`
//! - **`dispatching`**: Selection rules (FCFS, SJF, HRRN, EDF, …) and the
//!   `Selector` that applies them with deterministic tie-breaking
//! - **`scheduler`**: The policies themselves, plus `Statistics` and
//!   `ScheduleKpi`
//! - **`algorithm`**: `Algorithm` catalogue for runtime policy selection
//! - **`config`**: `SimulationConfig` (quantum, lottery seed)
//! - **`validation`**: Input integrity checks (names, burst, arrival,
//!   tickets, quantum)
//!
//! # Time Model
//!
//! Time is discrete and integer. The simulation starts at 0, processes
//! become ready at their arrival time, and the timeline covers
//! `[0, makespan)` without gaps; periods with nothing ready appear as
//! `"Idle"` entries.
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::models::Process;
//! use u_cpu_schedule::scheduler::round_robin;
//!
//! let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let result = round_robin(&procs, 2);
//! assert_eq!(result.makespan(), 8);
//! assert_eq!(result.execution_order(), vec!["P1", "P2", "P1", "P2", "P1"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod algorithm;
pub mod config;
pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use config::SimulationConfig;
pub use models::{Process, ProcessResult, SchedulingResult, TimelineEntry};
pub use validation::{ValidationError, ValidationErrorKind};
