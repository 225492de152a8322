//! Lottery scheduling.
//!
//! # Algorithm
//!
//! Every time unit, each ready process contributes its tickets to a pool
//! (in input order, so the pool is `[P1 × t1, P2 × t2, …]`). One pool entry
//! is drawn uniformly and its owner runs for one unit. Over many draws a
//! process's CPU share converges to `tickets / total ready tickets`.
//!
//! The random source is injected through [`TicketSource`], so tests can
//! script the draws.
//!
//! # Reference
//! Waldspurger & Weihl (1994), "Lottery Scheduling: Flexible
//! Proportional-Share Resource Management"

use log::{debug, trace};
use rand::Rng;

use crate::models::{Process, SchedulingResult, Timeline};

use super::ledger::Ledger;

/// A source of lottery draws.
pub trait TicketSource {
    /// Returns a pool position in `0..pool_size`. `pool_size` is never 0.
    fn draw(&mut self, pool_size: usize) -> usize;
}

impl<R: Rng + ?Sized> TicketSource for R {
    fn draw(&mut self, pool_size: usize) -> usize {
        self.random_range(0..pool_size)
    }
}

/// Lottery scheduling driven by `source`.
///
/// A process with `tickets == Some(0)` still holds one ticket here; the
/// validating entry point rejects such input.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::lottery;
///
/// let procs = vec![
///     Process::new("P1", 0, 3).with_tickets(5),
///     Process::new("P2", 0, 2).with_tickets(1),
/// ];
/// let result = lottery(&procs, &mut StdRng::seed_from_u64(7));
/// assert_eq!(result.cpu_time_of("P1"), 3);
/// assert_eq!(result.cpu_time_of("P2"), 2);
/// ```
pub fn lottery<S: TicketSource + ?Sized>(
    processes: &[Process],
    source: &mut S,
) -> SchedulingResult {
    let mut ledger = Ledger::new(processes);
    let mut timeline = Timeline::new();
    let mut time = 0;

    while !ledger.all_complete() {
        let pool: Vec<(usize, usize)> = ledger
            .candidates(time)
            .map(|c| (c.index, c.process.effective_tickets().max(1) as usize))
            .collect();
        let pool_size: usize = pool.iter().map(|&(_, tickets)| tickets).sum();

        if pool_size == 0 {
            time = ledger.idle_advance(time);
            trace!("Lottery: cpu idle until t={time}");
            continue;
        }

        let ticket = source.draw(pool_size) % pool_size;
        let index = ticket_owner(&pool, ticket);
        trace!(
            "Lottery: t={time} ticket {ticket}/{pool_size} -> {}",
            ledger.name(index)
        );

        timeline.run_unit(ledger.name(index), time);
        let completed = ledger.execute(index, time, 1);
        time += 1;

        if completed {
            debug!("Lottery: {} completed at t={time}", ledger.name(index));
        }
    }

    ledger.into_result(timeline)
}

/// Maps a pool position to the process holding it.
fn ticket_owner(pool: &[(usize, usize)], mut ticket: usize) -> usize {
    for &(index, tickets) in pool {
        if ticket < tickets {
            return index;
        }
        ticket -= tickets;
    }
    // Unreachable for ticket < pool size; fall back to the last holder
    pool.last().map(|&(index, _)| index).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_contiguous;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws.
    struct ScriptedDraws {
        draws: VecDeque<usize>,
    }

    impl ScriptedDraws {
        fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl TicketSource for ScriptedDraws {
        fn draw(&mut self, _pool_size: usize) -> usize {
            self.draws.pop_front().unwrap_or(0)
        }
    }

    fn spans(result: &SchedulingResult) -> Vec<(&str, i64, i64)> {
        result
            .gantt
            .iter()
            .map(|e| (e.name.as_str(), e.start, e.end))
            .collect()
    }

    #[test]
    fn test_ticket_owner() {
        let pool = vec![(0, 3), (1, 1), (4, 2)];
        assert_eq!(ticket_owner(&pool, 0), 0);
        assert_eq!(ticket_owner(&pool, 2), 0);
        assert_eq!(ticket_owner(&pool, 3), 1);
        assert_eq!(ticket_owner(&pool, 4), 4);
        assert_eq!(ticket_owner(&pool, 5), 4);
    }

    #[test]
    fn test_scripted_draws_map_to_processes() {
        // Pool at every step: [A, A, B] while both are incomplete
        let procs = vec![
            Process::new("A", 0, 2).with_tickets(2),
            Process::new("B", 0, 2).with_tickets(1),
        ];
        let mut source = ScriptedDraws::new(&[2, 0, 1, 0]);
        let result = lottery(&procs, &mut source);
        // draws: 2→B, 0→A, 1→A (A done at 3), then only B remains
        assert_eq!(spans(&result), vec![("B", 0, 1), ("A", 1, 3), ("B", 3, 4)]);
        assert_eq!(result.result_for("A").map(|r| r.finish), Some(3));
        assert_eq!(result.result_for("B").map(|r| r.finish), Some(4));
    }

    #[test]
    fn test_out_of_range_draw_wraps() {
        let procs = vec![Process::new("A", 0, 1), Process::new("B", 0, 1)];
        let mut source = ScriptedDraws::new(&[3, 0]);
        let result = lottery(&procs, &mut source);
        // 3 % 2 = 1 → B first
        assert_eq!(result.execution_order(), vec!["B", "A"]);
    }

    #[test]
    fn test_lottery_idle_and_conservation() {
        let procs = vec![
            Process::new("A", 0, 2).with_tickets(3),
            Process::new("B", 5, 3).with_tickets(1),
        ];
        let result = lottery(&procs, &mut SmallRng::seed_from_u64(42));
        assert!(is_contiguous(&result.gantt));
        assert_eq!(spans(&result)[1], ("Idle", 2, 5));
        assert_eq!(result.cpu_time_of("A"), 2);
        assert_eq!(result.cpu_time_of("B"), 3);
        assert!(result.results.iter().all(|r| r.wt >= 0));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let procs = vec![
            Process::new("A", 0, 6).with_tickets(4),
            Process::new("B", 1, 4).with_tickets(2),
            Process::new("C", 2, 3).with_tickets(1),
        ];
        let a = lottery(&procs, &mut SmallRng::seed_from_u64(9));
        let b = lottery(&procs, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_frequency_tracks_tickets() {
        // Both always ready with plenty of work: share of the first
        // 1000 units should approach 3/4 for A.
        let procs = vec![
            Process::new("A", 0, 5_000).with_tickets(3),
            Process::new("B", 0, 5_000).with_tickets(1),
        ];
        let mut rng = SmallRng::seed_from_u64(2024);
        let result = lottery(&procs, &mut rng);

        let window = 1_000;
        let a_units: i64 = result
            .gantt
            .iter()
            .filter(|e| e.name == "A" && e.start < window)
            .map(|e| e.end.min(window) - e.start)
            .sum();
        let share = a_units as f64 / window as f64;
        assert!((share - 0.75).abs() < 0.06, "share = {share}");
    }
}
