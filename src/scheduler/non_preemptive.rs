//! Non-preemptive selection policies.
//!
//! # Algorithm
//!
//! 1. Collect the ready set (arrived, not complete).
//! 2. If empty, idle until the next arrival.
//! 3. Otherwise select one process by the policy's rule (ties: input order)
//!    and run it to completion as a single timeline entry.
//!
//! # Complexity
//! O(n²) for n processes: n dispatches, each scanning the ready set.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use log::{debug, trace};

use crate::dispatching::{rules, SchedulingContext, Selector};
use crate::models::{Process, SchedulingResult, Timeline};

use super::ledger::Ledger;

/// Runs processes to completion in the order chosen by `selector`.
pub fn run_to_completion(processes: &[Process], selector: &Selector) -> SchedulingResult {
    let mut ledger = Ledger::new(processes);
    let mut timeline = Timeline::new();
    let mut time = 0;

    while !ledger.all_complete() {
        let context = SchedulingContext::at_time(time);
        let Some(index) = selector.select(ledger.candidates(time), &context) else {
            time = ledger.idle_advance(time);
            trace!("{}: cpu idle until t={time}", selector.rule().name());
            continue;
        };

        let burst = ledger.remaining(index);
        let name = ledger.name(index);
        debug!(
            "{}: dispatch {name} at t={time} for {burst}",
            selector.rule().name()
        );
        timeline.push(name, time, time + burst);
        ledger.execute(index, time, burst);
        time += burst;
    }

    ledger.into_result(timeline)
}

/// First Come, First Served.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::fcfs;
///
/// let result = fcfs(&[Process::new("P1", 0, 4), Process::new("P2", 2, 3)]);
/// assert_eq!(result.execution_order(), vec!["P1", "P2"]);
/// assert_eq!(result.avg_wt, "1.00");
/// ```
pub fn fcfs(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::FirstCome))
}

/// Shortest Job First (non-preemptive).
pub fn sjf(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::ShortestJob))
}

/// Longest Job First (non-preemptive).
pub fn ljf(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::LongestJob))
}

/// Priority scheduling (non-preemptive, lower number first).
pub fn priority(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::Priority))
}

/// Highest Response Ratio Next.
pub fn hrrn(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::Hrrn))
}

/// Earliest Deadline First (non-preemptive).
pub fn edf(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::EarliestDeadline))
}

/// Multilevel queue: the lowest queue level is always selected first;
/// within a level, input order decides. Once chosen a process runs to
/// completion.
pub fn multilevel_queue(processes: &[Process]) -> SchedulingResult {
    run_to_completion(processes, &Selector::new(rules::QueueLevel))
}
