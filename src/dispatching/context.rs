//! Selection context for rule evaluation.

/// Simulation state passed to selection rules.
///
/// Rules see the current clock and the remaining work of the candidate
/// being evaluated; everything else comes from the [`Process`] itself.
///
/// [`Process`]: crate::models::Process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}

/// A ready process as seen by a selection rule.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Index into the input slice.
    pub index: usize,
    /// The process.
    pub process: &'a crate::models::Process,
    /// Remaining burst time.
    pub remaining: i64,
}
