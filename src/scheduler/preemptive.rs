//! Preemptive unit-time selection policies.
//!
//! # Algorithm
//!
//! At every time unit the ready set is re-evaluated and the best candidate
//! runs for exactly one unit. Consecutive units of the same process extend
//! one timeline entry, so the timeline is maximally coalesced.
//!
//! # Tie-breaking
//! Equal scores go to the later process in input order. A newly arrived
//! process tying with the running one therefore takes the CPU, which is
//! what makes a fresh one-unit job in SRTF complete immediately.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, trace};

use crate::dispatching::{rules, SchedulingContext, Selector, TieBreaker};
use crate::models::{Process, SchedulingResult, Timeline};

use super::ledger::Ledger;

/// Runs one unit at a time, re-selecting with `selector` every unit.
pub fn run_unit_preemptive(processes: &[Process], selector: &Selector) -> SchedulingResult {
    let mut ledger = Ledger::new(processes);
    let mut timeline = Timeline::new();
    let mut time = 0;
    let mut running: Option<usize> = None;

    while !ledger.all_complete() {
        let context = SchedulingContext::at_time(time);
        let Some(index) = selector.select(ledger.candidates(time), &context) else {
            time = ledger.idle_advance(time);
            running = None;
            trace!("{}: cpu idle until t={time}", selector.rule().name());
            continue;
        };

        if running != Some(index) {
            debug!(
                "{}: switch to {} at t={time} (remaining {})",
                selector.rule().name(),
                ledger.name(index),
                ledger.remaining(index)
            );
            running = Some(index);
        }

        timeline.run_unit(ledger.name(index), time);
        let completed = ledger.execute(index, time, 1);
        time += 1;

        if completed {
            debug!(
                "{}: {} completed at t={time}",
                selector.rule().name(),
                ledger.name(index)
            );
            running = None;
        }
    }

    ledger.into_result(timeline)
}

fn preemptive_selector<R: crate::dispatching::SelectionRule + 'static>(rule: R) -> Selector {
    Selector::new(rule).with_tie_breaker(TieBreaker::LastInOrder)
}

/// Shortest Remaining Time First (preemptive SJF).
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::srtf;
///
/// let result = srtf(&[Process::new("long", 0, 5), Process::new("short", 1, 1)]);
/// assert_eq!(result.execution_order(), vec!["long", "short", "long"]);
/// ```
pub fn srtf(processes: &[Process]) -> SchedulingResult {
    run_unit_preemptive(processes, &preemptive_selector(rules::ShortestRemaining))
}

/// Longest Remaining Time First.
pub fn lrtf(processes: &[Process]) -> SchedulingResult {
    run_unit_preemptive(processes, &preemptive_selector(rules::LongestRemaining))
}

/// Preemptive priority scheduling (lower number first).
pub fn preemptive_priority(processes: &[Process]) -> SchedulingResult {
    run_unit_preemptive(processes, &preemptive_selector(rules::Priority))
}
