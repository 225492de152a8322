//! Process model.
//!
//! A process is a unit of CPU work competing for a single simulated core.
//! Besides arrival and burst time it carries the attributes consulted by
//! individual policies (priority, deadline, tickets, group, queue level).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be simulated.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// Each policy function treats its input as immutable and builds its own
/// ledger of remaining work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process name.
    pub name: String,
    /// Time unit at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). `None` counts as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Absolute deadline. `None` = no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<i64>,
    /// Lottery tickets. `None` counts as a single ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<u32>,
    /// Fair-share group label. `None` is the unnamed group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Multilevel queue level (0 = highest). `None` counts as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<u32>,
}

impl Process {
    /// Creates a process with the given name, arrival and burst time.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            priority: None,
            deadline: None,
            tickets: None,
            group: None,
            queue: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the absolute deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the lottery ticket count.
    pub fn with_tickets(mut self, tickets: u32) -> Self {
        self.tickets = Some(tickets);
        self
    }

    /// Sets the fair-share group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the multilevel queue level.
    pub fn with_queue(mut self, queue: u32) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Priority with the missing value resolved to 0.
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }

    /// Ticket count with the missing value resolved to 1.
    #[inline]
    pub fn effective_tickets(&self) -> u32 {
        self.tickets.unwrap_or(1)
    }

    /// Group label with the missing value resolved to the empty group.
    #[inline]
    pub fn effective_group(&self) -> &str {
        self.group.as_deref().unwrap_or("")
    }

    /// Queue level with the missing value resolved to 0.
    #[inline]
    pub fn effective_queue(&self) -> u32 {
        self.queue.unwrap_or(0)
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}
