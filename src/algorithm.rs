//! Policy catalogue.
//!
//! [`Algorithm`] names every scheduling policy in the crate and dispatches a
//! validated process list to it. Callers that select a policy at runtime
//! (from a CLI flag, a request body or a config file) go through here;
//! callers that know the policy statically can call the functions in
//! [`crate::scheduler`] directly.
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::{Algorithm, Process, SimulationConfig};
//!
//! let procs = vec![
//!     Process::new("P1", 0, 4),
//!     Process::new("P2", 2, 3),
//!     Process::new("P3", 6, 2),
//! ];
//! let algorithm: Algorithm = "fcfs".parse().unwrap();
//! let result = algorithm.run(&procs, &SimulationConfig::default()).unwrap();
//! assert_eq!(result.avg_wt, "1.00");
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::models::{Process, SchedulingResult};
use crate::scheduler::{self, TicketSource};
use crate::validation::{validate_for, ValidationError};

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// First Come, First Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Longest Job First (non-preemptive).
    Ljf,
    /// Non-preemptive priority, lower value first.
    Priority,
    /// Highest Response Ratio Next.
    Hrrn,
    /// Earliest Deadline First (non-preemptive).
    Edf,
    /// Fixed queue levels, input order within a level.
    MultilevelQueue,
    /// Shortest Remaining Time First.
    #[serde(alias = "preemptive-sjf")]
    Srtf,
    /// Longest Remaining Time First.
    Lrtf,
    /// Preemptive priority, lower value first.
    PreemptivePriority,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
    /// Two-level feedback queue: RR on Q0, FCFS on Q1.
    MultilevelFeedbackQueue,
    /// Ticket-weighted random selection.
    Lottery,
    /// Round-robin over groups, then over members.
    FairShare,
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm: '{}'", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl Algorithm {
    /// Every policy, in catalogue order.
    pub const ALL: [Algorithm; 14] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Ljf,
        Algorithm::Priority,
        Algorithm::Hrrn,
        Algorithm::Edf,
        Algorithm::MultilevelQueue,
        Algorithm::Srtf,
        Algorithm::Lrtf,
        Algorithm::PreemptivePriority,
        Algorithm::RoundRobin,
        Algorithm::MultilevelFeedbackQueue,
        Algorithm::Lottery,
        Algorithm::FairShare,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First Come, First Served",
            Algorithm::Sjf => "Shortest Job First",
            Algorithm::Ljf => "Longest Job First",
            Algorithm::Priority => "Priority (Non-Preemptive)",
            Algorithm::Hrrn => "Highest Response Ratio Next",
            Algorithm::Edf => "Earliest Deadline First",
            Algorithm::MultilevelQueue => "Multilevel Queue",
            Algorithm::Srtf => "Shortest Remaining Time First",
            Algorithm::Lrtf => "Longest Remaining Time First",
            Algorithm::PreemptivePriority => "Priority (Preemptive)",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::MultilevelFeedbackQueue => "Multilevel Feedback Queue",
            Algorithm::Lottery => "Lottery",
            Algorithm::FairShare => "Fair Share",
        }
    }

    /// Short identifier, identical to the serialized form.
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Ljf => "ljf",
            Algorithm::Priority => "priority",
            Algorithm::Hrrn => "hrrn",
            Algorithm::Edf => "edf",
            Algorithm::MultilevelQueue => "multilevel-queue",
            Algorithm::Srtf => "srtf",
            Algorithm::Lrtf => "lrtf",
            Algorithm::PreemptivePriority => "preemptive-priority",
            Algorithm::RoundRobin => "round-robin",
            Algorithm::MultilevelFeedbackQueue => "multilevel-feedback-queue",
            Algorithm::Lottery => "lottery",
            Algorithm::FairShare => "fair-share",
        }
    }

    /// Whether a running process can be interrupted before it completes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf
                | Algorithm::Lrtf
                | Algorithm::PreemptivePriority
                | Algorithm::RoundRobin
                | Algorithm::MultilevelFeedbackQueue
                | Algorithm::Lottery
                | Algorithm::FairShare
        )
    }

    /// Whether the policy reads [`SimulationConfig::quantum`].
    pub fn uses_quantum(&self) -> bool {
        matches!(
            self,
            Algorithm::RoundRobin | Algorithm::MultilevelFeedbackQueue
        )
    }

    /// Whether identical input always yields identical output.
    pub fn is_deterministic(&self) -> bool {
        *self != Algorithm::Lottery
    }

    /// Validates the input and runs the policy.
    ///
    /// Lottery draws come from `StdRng` seeded with [`SimulationConfig::seed`]
    /// when set, otherwise from the thread-local generator.
    pub fn run(
        &self,
        processes: &[Process],
        config: &SimulationConfig,
    ) -> Result<SchedulingResult, Vec<ValidationError>> {
        match config.seed {
            Some(seed) => {
                self.run_with_source(processes, config, &mut StdRng::seed_from_u64(seed))
            }
            None => self.run_with_source(processes, config, &mut rand::rng()),
        }
    }

    /// Validates the input and runs the policy with an explicit draw source.
    ///
    /// `source` is only consulted by [`Algorithm::Lottery`].
    pub fn run_with_source<S: TicketSource + ?Sized>(
        &self,
        processes: &[Process],
        config: &SimulationConfig,
        source: &mut S,
    ) -> Result<SchedulingResult, Vec<ValidationError>> {
        validate_for(*self, processes, config)?;
        let result = self.simulate(processes, config.quantum, source);
        debug!(
            "{}: {} processes, makespan {}, avgTAT {}, avgWT {}",
            self.slug(),
            processes.len(),
            result.makespan(),
            result.avg_tat,
            result.avg_wt
        );
        Ok(result)
    }

    /// Runs the policy without validation.
    ///
    /// A `quantum` below 1 is treated as 1.
    pub fn simulate<S: TicketSource + ?Sized>(
        &self,
        processes: &[Process],
        quantum: i64,
        source: &mut S,
    ) -> SchedulingResult {
        match self {
            Algorithm::Fcfs => scheduler::fcfs(processes),
            Algorithm::Sjf => scheduler::sjf(processes),
            Algorithm::Ljf => scheduler::ljf(processes),
            Algorithm::Priority => scheduler::priority(processes),
            Algorithm::Hrrn => scheduler::hrrn(processes),
            Algorithm::Edf => scheduler::edf(processes),
            Algorithm::MultilevelQueue => scheduler::multilevel_queue(processes),
            Algorithm::Srtf => scheduler::srtf(processes),
            Algorithm::Lrtf => scheduler::lrtf(processes),
            Algorithm::PreemptivePriority => scheduler::preemptive_priority(processes),
            Algorithm::RoundRobin => scheduler::round_robin(processes, quantum),
            Algorithm::MultilevelFeedbackQueue => {
                scheduler::multilevel_feedback_queue(processes, quantum)
            }
            Algorithm::Lottery => scheduler::lottery(processes, source),
            Algorithm::FairShare => scheduler::fair_share(processes),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parses a slug or a common alias, ignoring case, `_` and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        if let Some(algorithm) = Algorithm::ALL.iter().find(|a| a.slug() == key) {
            return Ok(*algorithm);
        }
        let algorithm = match key.as_str() {
            "first-come-first-served" => Algorithm::Fcfs,
            "shortest-job-first" => Algorithm::Sjf,
            "longest-job-first" => Algorithm::Ljf,
            "priority-np" | "non-preemptive-priority" => Algorithm::Priority,
            "mlq" => Algorithm::MultilevelQueue,
            "preemptive-sjf" | "shortest-remaining-time-first" => Algorithm::Srtf,
            "longest-remaining-time-first" => Algorithm::Lrtf,
            "priority-p" | "priority-preemptive" => Algorithm::PreemptivePriority,
            "rr" => Algorithm::RoundRobin,
            "mlfq" => Algorithm::MultilevelFeedbackQueue,
            "fair" => Algorithm::FairShare,
            _ => return Err(UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}
