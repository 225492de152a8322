//! Two-level Multilevel Feedback Queue.
//!
//! - **Q0**: Round-Robin with a fixed quantum. Every arrival enters here.
//! - **Q1**: FCFS, run to completion.
//!
//! Q0 is always served before Q1. A Q0 dispatch that does not finish within
//! its quantum is demoted to Q1 and never returns to Q0. A Q1 dispatch is not
//! interrupted by later arrivals.
//!
//! # Reference
//! Corbató et al. (1962), "An Experimental Time-Sharing System"

use std::collections::VecDeque;

use log::{debug, trace};

use crate::models::{Process, SchedulingResult, Timeline};

use super::ledger::Ledger;

/// Multilevel Feedback Queue with the given Q0 quantum (values below 1 are
/// treated as 1).
pub fn multilevel_feedback_queue(processes: &[Process], quantum: i64) -> SchedulingResult {
    let quantum = quantum.max(1);
    let mut ledger = Ledger::new(processes);
    let mut timeline = Timeline::new();
    let mut q0: VecDeque<usize> = VecDeque::new();
    let mut q1: VecDeque<usize> = VecDeque::new();
    let mut admitted = vec![false; ledger.len()];
    let mut time = 0;

    while !ledger.all_complete() {
        ledger.admit_arrivals(time, &mut admitted, |i| q0.push_back(i));

        if let Some(index) = q0.pop_front() {
            let slice = quantum.min(ledger.remaining(index));
            let name = ledger.name(index);
            debug!("MLFQ: Q0 dispatch {name} at t={time} for {slice}");
            timeline.push(name, time, time + slice);
            let completed = ledger.execute(index, time, slice);
            time += slice;

            ledger.admit_arrivals(time, &mut admitted, |i| q0.push_back(i));
            if !completed {
                debug!(
                    "MLFQ: demote {name} to Q1 (remaining {})",
                    ledger.remaining(index)
                );
                q1.push_back(index);
            }
        } else if let Some(index) = q1.pop_front() {
            let rest = ledger.remaining(index);
            let name = ledger.name(index);
            debug!("MLFQ: Q1 dispatch {name} at t={time} for {rest}");
            timeline.push(name, time, time + rest);
            ledger.execute(index, time, rest);
            time += rest;
        } else {
            time = ledger.idle_advance(time);
            trace!("MLFQ: cpu idle until t={time}");
        }
    }

    ledger.into_result(timeline)
}
