//! Search bookkeeping shared by the exhaustive solvers.
//!
//! Every solver call owns its own [`SearchStats`] and incumbent. Nothing
//! here is process-wide: concurrent calls on different instances never
//! observe each other's state.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters collected while a solver runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Search nodes visited (DP: table cells filled; greedy: items scanned).
    pub nodes_explored: u64,

    /// Subtrees cut because they could not beat the incumbent.
    pub prunings_bound: u64,

    /// Extensions skipped because they were infeasible
    /// (item does not fit, missing edge).
    pub prunings_infeasible: u64,

    /// Times the incumbent was strictly improved.
    pub solutions_found: u64,
}

impl SearchStats {
    #[inline]
    pub(crate) fn on_node(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_prune_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_prune_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    #[inline]
    pub(crate) fn on_solution(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    /// Adds another worker's counters into these.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_explored = self.nodes_explored.saturating_add(other.nodes_explored);
        self.prunings_bound = self.prunings_bound.saturating_add(other.prunings_bound);
        self.prunings_infeasible = self
            .prunings_infeasible
            .saturating_add(other.prunings_infeasible);
        self.solutions_found = self.solutions_found.saturating_add(other.solutions_found);
    }
}

/// Configuration for the minimization branch-and-bound solvers.
///
/// # Examples
///
/// ```
/// use u_exactopt::search::BranchAndBoundConfig;
///
/// let config = BranchAndBoundConfig::default().with_parallel(true);
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchAndBoundConfig {
    /// Split top-level branches across rayon workers.
    ///
    /// Ignored unless the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl BranchAndBoundConfig {
    /// Enables or disables parallel branch exploration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether this call should actually fan out.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub(crate) fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}

/// Best complete cost visible to a minimization search.
pub(crate) trait CostBound {
    /// Cheapest complete cost known so far, if any.
    fn best(&self) -> Option<u64>;

    /// Offers a complete solution cost. Returns `true` when it strictly
    /// improves on [`CostBound::best`] and the caller should record it.
    fn offer(&mut self, cost: u64) -> bool;

    /// Whether a partial cost (or a lower bound on completions) can no
    /// longer lead to a strict improvement.
    #[inline]
    fn cannot_improve(&self, cost: u64) -> bool {
        self.best().is_some_and(|best| cost >= best)
    }
}

/// Incumbent cost owned by a single sequential search.
#[derive(Debug, Default)]
pub(crate) struct LocalBest(Option<u64>);

impl CostBound for LocalBest {
    #[inline]
    fn best(&self) -> Option<u64> {
        self.0
    }

    #[inline]
    fn offer(&mut self, cost: u64) -> bool {
        if self.0.is_some_and(|best| cost >= best) {
            return false;
        }
        self.0 = Some(cost);
        true
    }
}

/// Incumbent cost shared between parallel workers.
///
/// `u64::MAX` encodes "no incumbent yet". Input constructors keep every
/// total strictly below it, so the encoding never collides with a real cost.
#[cfg(feature = "parallel")]
pub(crate) struct SharedBest<'a>(&'a AtomicU64);

#[cfg(feature = "parallel")]
impl<'a> SharedBest<'a> {
    pub(crate) const NONE: u64 = u64::MAX;

    pub(crate) fn new(cell: &'a AtomicU64) -> Self {
        Self(cell)
    }
}

#[cfg(feature = "parallel")]
impl CostBound for SharedBest<'_> {
    #[inline]
    fn best(&self) -> Option<u64> {
        let v = self.0.load(Ordering::Acquire);
        (v != Self::NONE).then_some(v)
    }

    #[inline]
    fn offer(&mut self, cost: u64) -> bool {
        cost < self.0.fetch_min(cost, Ordering::AcqRel)
    }
}

/// Keeps the cheaper of two candidates; on equal cost the first wins.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) fn cheaper<T>(a: Option<(u64, T)>, b: Option<(u64, T)>) -> Option<(u64, T)> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b.0 < a.0 { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}
