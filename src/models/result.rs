//! Simulation result model.
//!
//! The shape consumed by presentation layers:
//! `{ results, avgTAT, avgWT, gantt }`, with `results` in input order.

use serde::{Deserialize, Serialize};

use super::{Process, TimelineEntry};

/// Per-process outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The input process.
    #[serde(flatten)]
    pub process: Process,
    /// Completion time.
    pub finish: i64,
    /// Turnaround time (`finish - arrival`).
    pub tat: i64,
    /// Waiting time (`tat - burst`).
    pub wt: i64,
    /// Response time (first dispatch - arrival).
    pub response: i64,
}

impl ProcessResult {
    /// Process name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.process.name
    }
}

/// Complete output of one policy run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Per-process results, same order and length as the input.
    pub results: Vec<ProcessResult>,
    /// Mean turnaround time, two decimals.
    #[serde(rename = "avgTAT")]
    pub avg_tat: String,
    /// Mean waiting time, two decimals.
    #[serde(rename = "avgWT")]
    pub avg_wt: String,
    /// Contiguous execution timeline.
    pub gantt: Vec<TimelineEntry>,
}

impl SchedulingResult {
    /// Finds the result for a process by name.
    pub fn result_for(&self, name: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.process.name == name)
    }

    /// Total CPU time attributed to `name` on the timeline.
    pub fn cpu_time_of(&self, name: &str) -> i64 {
        self.gantt
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.duration())
            .sum()
    }

    /// Unrounded mean turnaround time (0 when empty).
    pub fn average_turnaround(&self) -> f64 {
        mean(self.results.iter().map(|r| r.tat))
    }

    /// Unrounded mean waiting time (0 when empty).
    pub fn average_waiting(&self) -> f64 {
        mean(self.results.iter().map(|r| r.wt))
    }

    /// End of the timeline.
    pub fn makespan(&self) -> i64 {
        self.gantt.last().map(|e| e.end).unwrap_or(0)
    }

    /// Sequence of process names in execution order (idle excluded).
    pub fn execution_order(&self) -> Vec<&str> {
        self.gantt
            .iter()
            .filter(|e| !e.is_idle())
            .map(|e| e.name.as_str())
            .collect()
    }
}

fn mean(values: impl ExactSizeIterator<Item = i64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<i64>() as f64 / n as f64
}
