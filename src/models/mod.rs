//! Simulation domain models.
//!
//! Provides the data contract shared by every scheduling policy: the input
//! [`Process`], the [`Timeline`] builder and its [`TimelineEntry`] output,
//! and the [`SchedulingResult`] returned by each policy.
//!
//! # Field Mappings
//!
//! | Rust | JSON | Meaning |
//! |------|------|---------|
//! | `Process::arrival_time` | `arrivalTime` | Ready from this time unit |
//! | `Process::burst_time` | `burstTime` | Total CPU demand |
//! | `SchedulingResult::avg_tat` | `avgTAT` | Mean turnaround, 2 decimals |
//! | `SchedulingResult::avg_wt` | `avgWT` | Mean waiting, 2 decimals |
//! | `SchedulingResult::gantt` | `gantt` | Contiguous timeline |

mod process;
mod result;
mod timeline;

pub use process::Process;
pub use result::{ProcessResult, SchedulingResult};
pub use timeline::{is_contiguous, Timeline, TimelineEntry, IDLE};
