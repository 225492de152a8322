//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Arrival-based**: FCFS
//! - **Length-based**: SJF, LJF, SRTF, LRTF
//! - **Urgency-based**: Priority, EDF, Queue level
//! - **Aging**: HRRN
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"

use super::{Candidate, RuleScore, SchedulingContext, SelectionRule};

// ======================== Arrival-based rules ========================

/// First Come, First Served.
///
/// Prioritizes the earliest arrival.
#[derive(Debug, Clone, Copy)]
pub struct FirstCome;

impl SelectionRule for FirstCome {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.process.arrival_time as f64
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

// ======================== Length-based rules ========================

/// Shortest Job First.
///
/// Prioritizes the smallest total burst. Minimizes mean waiting time
/// among non-preemptive policies when all jobs are available.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.process.burst_time as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Longest Job First.
#[derive(Debug, Clone, Copy)]
pub struct LongestJob;

impl SelectionRule for LongestJob {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        -(candidate.process.burst_time as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Preemptive counterpart of SJF: scores by remaining work, so a newly
/// arrived short process overtakes a partially run long one.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.remaining as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Longest Remaining Time First.
#[derive(Debug, Clone, Copy)]
pub struct LongestRemaining;

impl SelectionRule for LongestRemaining {
    fn name(&self) -> &'static str {
        "LRTF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        -(candidate.remaining as f64)
    }

    fn description(&self) -> &'static str {
        "Longest Remaining Time First"
    }
}

// ======================== Urgency-based rules ========================

/// Static priority (lower number = more urgent).
///
/// Processes without a priority count as priority 0.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl SelectionRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.process.effective_priority() as f64
    }

    fn description(&self) -> &'static str {
        "Priority (lower number first)"
    }
}

/// Earliest Deadline First.
///
/// Processes without a deadline are served after every process that has
/// one.
///
/// # Reference
/// Liu & Layland (1973)
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadline;

impl SelectionRule for EarliestDeadline {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate
            .process
            .deadline
            .map(|d| d as f64)
            .unwrap_or(f64::INFINITY)
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

/// Multilevel queue level (0 = system queue, served first).
#[derive(Debug, Clone, Copy)]
pub struct QueueLevel;

impl SelectionRule for QueueLevel {
    fn name(&self) -> &'static str {
        "MLQ"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.process.effective_queue() as f64
    }

    fn description(&self) -> &'static str {
        "Multilevel Queue (lowest level first)"
    }
}

// ======================== Aging rules ========================

/// Highest Response Ratio Next.
///
/// Ratio = (waiting + burst) / burst, where waiting is the time since
/// arrival. Recomputed at every decision, so long jobs age upward and are
/// not starved by a stream of short ones.
///
/// # Reference
/// Brinch Hansen (1971)
#[derive(Debug, Clone, Copy)]
pub struct Hrrn;

impl Hrrn {
    /// Response ratio of `candidate` at `time`.
    pub fn response_ratio(candidate: &Candidate<'_>, time: i64) -> f64 {
        let burst = candidate.process.burst_time.max(1) as f64;
        let waiting = (time - candidate.process.arrival_time).max(0) as f64;
        (waiting + burst) / burst
    }
}

impl SelectionRule for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, context: &SchedulingContext) -> RuleScore {
        -Self::response_ratio(candidate, context.current_time)
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}
