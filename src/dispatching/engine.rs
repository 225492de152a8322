//! Candidate selection.
//!
//! Applies a single [`SelectionRule`] to the ready set and resolves ties
//! deterministically by input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{Candidate, RuleScore, SchedulingContext, SelectionRule};

/// How equal scores are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// The earliest candidate in input order wins.
    #[default]
    FirstInOrder,
    /// The latest candidate in input order wins.
    LastInOrder,
}

/// Selects the best ready candidate under a rule.
#[derive(Clone)]
pub struct Selector {
    rule: Arc<dyn SelectionRule>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl Selector {
    /// Creates a selector with [`TieBreaker::FirstInOrder`].
    pub fn new<R: SelectionRule + 'static>(rule: R) -> Self {
        Self {
            rule: Arc::new(rule),
            tie_breaker: TieBreaker::FirstInOrder,
            epsilon: 1e-9,
        }
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The underlying rule.
    pub fn rule(&self) -> &dyn SelectionRule {
        self.rule.as_ref()
    }

    /// Returns the input index of the best candidate.
    ///
    /// Candidates must be yielded in input order for the tie-breaker to be
    /// meaningful. Returns `None` for an empty candidate set.
    pub fn select<'a, I>(&self, candidates: I, context: &SchedulingContext) -> Option<usize>
    where
        I: IntoIterator<Item = Candidate<'a>>,
    {
        let mut best: Option<(usize, RuleScore)> = None;

        for candidate in candidates {
            let score = self.rule.evaluate(&candidate, context);
            let replace = match best {
                None => true,
                Some((_, best_score)) => match self.compare(score, best_score) {
                    Ordering::Less => true,
                    Ordering::Equal => self.tie_breaker == TieBreaker::LastInOrder,
                    Ordering::Greater => false,
                },
            };
            if replace {
                best = Some((candidate.index, score));
            }
        }

        best.map(|(index, _)| index)
    }

    fn compare(&self, a: RuleScore, b: RuleScore) -> Ordering {
        if a == b || (a - b).abs() <= self.epsilon {
            // Also covers equal infinities, whose difference is NaN
            return Ordering::Equal;
        }
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("rule", &self.rule.name())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
