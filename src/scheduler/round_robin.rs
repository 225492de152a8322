//! Round-Robin scheduling.
//!
//! # Algorithm
//!
//! 1. Admit every arrived process to the tail of a FIFO ready queue.
//! 2. Pop the head and run it for `min(quantum, remaining)` units.
//! 3. Admit processes that arrived during the slice.
//! 4. Re-enqueue the process at the tail if it has work left.
//!
//! Step 3 happening before step 4 is the conventional tie-break: a process
//! arriving exactly when a slice ends is served before the preempted one.
//!
//! Each dispatch is one timeline entry, even when the same process is
//! dispatched again immediately.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};

use crate::models::{Process, SchedulingResult, Timeline};

use super::ledger::Ledger;

/// Default time quantum for quantum-based policies.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round-Robin with the given quantum (values below 1 are treated as 1).
///
/// # Example
///
/// ```
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::round_robin;
///
/// let result = round_robin(&[Process::new("P1", 0, 3), Process::new("P2", 0, 2)], 2);
/// assert_eq!(result.execution_order(), vec!["P1", "P2", "P1"]);
/// ```
pub fn round_robin(processes: &[Process], quantum: i64) -> SchedulingResult {
    let quantum = quantum.max(1);
    let mut ledger = Ledger::new(processes);
    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut admitted = vec![false; ledger.len()];
    let mut time = 0;

    while !ledger.all_complete() {
        ledger.admit_arrivals(time, &mut admitted, |i| queue.push_back(i));

        let Some(index) = queue.pop_front() else {
            time = ledger.idle_advance(time);
            trace!("RR: cpu idle until t={time}");
            continue;
        };

        let slice = quantum.min(ledger.remaining(index));
        let name = ledger.name(index);
        debug!("RR: dispatch {name} at t={time} for {slice}");
        timeline.push(name, time, time + slice);
        let completed = ledger.execute(index, time, slice);
        time += slice;

        ledger.admit_arrivals(time, &mut admitted, |i| queue.push_back(i));
        if !completed {
            queue.push_back(index);
        }
    }

    ledger.into_result(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_contiguous;

    fn spans(result: &SchedulingResult) -> Vec<(&str, i64, i64)> {
        result
            .gantt
            .iter()
            .map(|e| (e.name.as_str(), e.start, e.end))
            .collect()
    }

    #[test]
    fn test_rr_reference_interleave() {
        let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let result = round_robin(&procs, 2);
        assert_eq!(
            spans(&result),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P1", 4, 6),
                ("P2", 6, 7),
                ("P1", 7, 8),
            ]
        );
        assert_eq!(result.result_for("P1").map(|r| r.finish), Some(8));
        assert_eq!(result.result_for("P2").map(|r| r.finish), Some(7));
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_first() {
        // P2 arrives exactly when P1's first slice ends; it must be queued
        // ahead of the preempted P1.
        let procs = vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 2, 2),
            Process::new("P3", 0, 2),
        ];
        let result = round_robin(&procs, 2);
        assert_eq!(result.execution_order(), vec!["P1", "P3", "P2", "P1"]);
    }

    #[test]
    fn test_rr_single_process_one_entry_per_dispatch() {
        let result = round_robin(&[Process::new("P1", 0, 5)], 2);
        assert_eq!(
            spans(&result),
            vec![("P1", 0, 2), ("P1", 2, 4), ("P1", 4, 5)]
        );
        assert_eq!(result.results[0].wt, 0);
    }

    #[test]
    fn test_rr_idle_until_arrival() {
        let procs = vec![Process::new("P1", 0, 1), Process::new("P2", 4, 3)];
        let result = round_robin(&procs, 3);
        assert_eq!(
            spans(&result),
            vec![("P1", 0, 1), ("Idle", 1, 4), ("P2", 4, 7)]
        );
        assert!(is_contiguous(&result.gantt));
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let procs = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 2),
        ];
        let rr = round_robin(&procs, 100);
        let fcfs = crate::scheduler::fcfs(&procs);
        assert_eq!(rr.gantt, fcfs.gantt);
        assert_eq!(rr.avg_wt, fcfs.avg_wt);
    }

    #[test]
    fn test_rr_zero_quantum_clamped() {
        let result = round_robin(&[Process::new("P1", 0, 2)], 0);
        assert_eq!(spans(&result), vec![("P1", 0, 1), ("P1", 1, 2)]);
    }

    #[test]
    fn test_rr_waiting_non_negative() {
        let procs = vec![
            Process::new("A", 0, 5),
            Process::new("B", 1, 3),
            Process::new("C", 2, 1),
            Process::new("D", 3, 2),
            Process::new("E", 4, 3),
        ];
        let result = round_robin(&procs, 2);
        assert!(result.results.iter().all(|r| r.wt >= 0));
        for p in &procs {
            assert_eq!(result.cpu_time_of(&p.name), p.burst_time);
        }
    }
}
