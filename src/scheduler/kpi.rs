//! Simulation metrics.
//!
//! [`Statistics`] is the reducer every policy shares: turnaround and
//! waiting time per process plus their means. [`ScheduleKpi`] derives
//! whole-run indicators from a finished [`SchedulingResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround (TAT) | completion - arrival |
//! | Waiting (WT) | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | end of the timeline |
//! | CPU utilization | busy time / makespan |
//! | Throughput | completed processes / makespan |
//! | Context switches | changes of running process (idle skipped) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::SchedulingResult;

/// Turnaround and waiting statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Turnaround time per process.
    pub turnaround: Vec<i64>,
    /// Waiting time per process.
    pub waiting: Vec<i64>,
    /// Mean turnaround time (0 for no processes).
    pub avg_turnaround: f64,
    /// Mean waiting time (0 for no processes).
    pub avg_waiting: f64,
}

impl Statistics {
    /// Computes statistics from parallel arrays.
    ///
    /// `tat[i] = finish[i] - arrival[i]`, `wt[i] = tat[i] - burst[i]`.
    /// Extra elements in a longer slice are ignored.
    pub fn compute(finish: &[i64], arrival: &[i64], burst: &[i64]) -> Self {
        debug_assert!(finish.len() == arrival.len() && arrival.len() == burst.len());

        let turnaround: Vec<i64> = finish
            .iter()
            .zip(arrival)
            .map(|(&f, &a)| f - a)
            .collect();
        let waiting: Vec<i64> = turnaround
            .iter()
            .zip(burst)
            .map(|(&tat, &b)| tat - b)
            .collect();

        Self {
            avg_turnaround: mean(&turnaround),
            avg_waiting: mean(&waiting),
            turnaround,
            waiting,
        }
    }

    /// Mean turnaround fixed to two decimals.
    pub fn avg_turnaround_display(&self) -> String {
        format_average(self.avg_turnaround)
    }

    /// Mean waiting fixed to two decimals.
    pub fn avg_waiting_display(&self) -> String {
        format_average(self.avg_waiting)
    }
}

/// Formats an average with two decimals.
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}

fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<i64>() as f64 / values.len() as f64
    }
}

/// Whole-run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// End of the timeline.
    pub makespan: i64,
    /// Time spent running processes.
    pub busy_time: i64,
    /// Time spent idle.
    pub idle_time: i64,
    /// Busy fraction of the makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
    /// Mean response time.
    pub avg_response: f64,
    /// Longest waiting time of any process.
    pub max_waiting: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished simulation.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let makespan = result.makespan();
        let (idle, busy): (Vec<_>, Vec<_>) = result.gantt.iter().partition(|e| e.is_idle());
        let busy_time: i64 = busy.iter().map(|e| e.duration()).sum();
        let idle_time: i64 = idle.iter().map(|e| e.duration()).sum();

        let context_switches = busy
            .windows(2)
            .filter(|w| w[0].name != w[1].name)
            .count();

        let responses: Vec<i64> = result.results.iter().map(|r| r.response).collect();
        let max_waiting = result.results.iter().map(|r| r.wt).max().unwrap_or(0);

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                result.results.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            busy_time,
            idle_time,
            cpu_utilization,
            throughput,
            context_switches,
            avg_response: mean(&responses),
            max_waiting,
        }
    }
}
