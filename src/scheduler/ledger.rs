//! Remaining-time ledger.
//!
//! Per-call mutable state shared by every policy loop: remaining burst per
//! process, completion and first-dispatch times. A process is complete
//! exactly when its remaining time reaches zero, and a complete process is
//! never offered as a candidate again.

use crate::dispatching::Candidate;
use crate::models::{Process, ProcessResult, SchedulingResult, Timeline};

use super::kpi::Statistics;

#[derive(Debug)]
pub(crate) struct Ledger<'a> {
    processes: &'a [Process],
    remaining: Vec<i64>,
    finish: Vec<Option<i64>>,
    first_start: Vec<Option<i64>>,
    completed: usize,
}

impl<'a> Ledger<'a> {
    /// Opens a ledger over `processes`.
    ///
    /// Processes without positive burst complete at their arrival and never
    /// reach the CPU, so policy loops always terminate.
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        let n = processes.len();
        let mut ledger = Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time.max(0)).collect(),
            finish: vec![None; n],
            first_start: vec![None; n],
            completed: 0,
        };
        for (i, p) in processes.iter().enumerate() {
            if ledger.remaining[i] == 0 {
                ledger.finish[i] = Some(p.arrival_time);
                ledger.first_start[i] = Some(p.arrival_time);
                ledger.completed += 1;
            }
        }
        ledger
    }

    pub(crate) fn len(&self) -> usize {
        self.processes.len()
    }

    pub(crate) fn name(&self, index: usize) -> &'a str {
        &self.processes[index].name
    }

    pub(crate) fn remaining(&self, index: usize) -> i64 {
        self.remaining[index]
    }

    pub(crate) fn is_complete(&self, index: usize) -> bool {
        self.finish[index].is_some()
    }

    pub(crate) fn all_complete(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Arrived and not yet complete.
    pub(crate) fn is_ready(&self, index: usize, time: i64) -> bool {
        !self.is_complete(index) && self.processes[index].has_arrived(time)
    }

    /// Ready processes at `time`, in input order.
    pub(crate) fn candidates(&self, time: i64) -> impl Iterator<Item = Candidate<'a>> + '_ {
        let processes = self.processes;
        (0..processes.len())
            .filter(move |&i| self.is_ready(i, time))
            .map(move |i| Candidate {
                index: i,
                process: &processes[i],
                remaining: self.remaining[i],
            })
    }

    /// Time the CPU resumes after idling at `time`.
    ///
    /// Jumps to the earliest pending arrival; stepping one unit at a time
    /// would yield the same timeline.
    pub(crate) fn idle_advance(&self, time: i64) -> i64 {
        self.processes
            .iter()
            .enumerate()
            .filter(|&(i, p)| !self.is_complete(i) && p.arrival_time > time)
            .map(|(_, p)| p.arrival_time)
            .min()
            .unwrap_or(time + 1)
    }

    /// Appends every newly arrived, incomplete process to a queue.
    ///
    /// `admitted` remembers who has already been queued; arrivals are
    /// offered in input order.
    pub(crate) fn admit_arrivals(
        &self,
        time: i64,
        admitted: &mut [bool],
        mut enqueue: impl FnMut(usize),
    ) {
        for (i, seen) in admitted.iter_mut().enumerate() {
            if !*seen && self.is_ready(i, time) {
                *seen = true;
                enqueue(i);
            }
        }
    }

    /// Runs `index` for `amount` units starting at `start`.
    ///
    /// Returns `true` when this execution completed the process.
    pub(crate) fn execute(&mut self, index: usize, start: i64, amount: i64) -> bool {
        debug_assert!(!self.is_complete(index), "complete process selected again");
        debug_assert!(amount > 0 && amount <= self.remaining[index]);

        self.first_start[index].get_or_insert(start);
        self.remaining[index] -= amount;
        if self.remaining[index] == 0 {
            self.finish[index] = Some(start + amount);
            self.completed += 1;
            true
        } else {
            false
        }
    }

    /// Reduces the ledger and timeline into a result.
    pub(crate) fn into_result(self, timeline: Timeline) -> SchedulingResult {
        let finish: Vec<i64> = self
            .finish
            .iter()
            .zip(self.processes)
            .map(|(f, p)| f.unwrap_or(p.arrival_time))
            .collect();
        let arrival: Vec<i64> = self.processes.iter().map(|p| p.arrival_time).collect();
        let burst: Vec<i64> = self.processes.iter().map(|p| p.burst_time).collect();
        let stats = Statistics::compute(&finish, &arrival, &burst);

        let results = self
            .processes
            .iter()
            .enumerate()
            .map(|(i, p)| ProcessResult {
                process: p.clone(),
                finish: finish[i],
                tat: stats.turnaround[i],
                wt: stats.waiting[i],
                response: self.first_start[i].unwrap_or(p.arrival_time) - p.arrival_time,
            })
            .collect();

        SchedulingResult {
            results,
            avg_tat: stats.avg_turnaround_display(),
            avg_wt: stats.avg_waiting_display(),
            gantt: timeline.into_entries(),
        }
    }
}
