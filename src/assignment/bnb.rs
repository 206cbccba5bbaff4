//! Branch-and-bound assignment solver.
//!
//! # Algorithm
//!
//! Same agent-by-agent recursion as
//! [`AssignmentBacktracking`](super::AssignmentBacktracking). Before
//! branching on agent `k`, the node is discarded when
//!
//! ```text
//! cost + sum(min(c[a][t] for t free) for a in k..n) >= best
//! ```
//!
//! Each remaining agent is allowed its cheapest free task independently,
//! ignoring that tasks must be distinct, so the bound can only underestimate
//! the best completion.
//!
//! With [`BranchAndBoundConfig::parallel`] and the `parallel` feature, the
//! choices for the first agent are explored on rayon workers sharing one
//! atomic incumbent cost.

use log::debug;

use super::types::{Assignment, AssignmentResult, AssignmentSolver, CostMatrix};
use crate::search::{BranchAndBoundConfig, CostBound, LocalBest, SearchStats};

/// Exact solver pruned by the per-agent minimum-cost bound.
#[derive(Debug, Clone, Default)]
pub struct AssignmentBranchAndBound {
    config: BranchAndBoundConfig,
}

impl AssignmentBranchAndBound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given configuration.
    pub fn with_config(mut self, config: BranchAndBoundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BranchAndBoundConfig {
        &self.config
    }
}

struct BoundedPermutationSearch<'a, B> {
    matrix: &'a CostMatrix,
    tasks: Vec<usize>,
    used: Vec<bool>,
    incumbent: B,
    best: Option<(u64, Vec<usize>)>,
    stats: SearchStats,
}

impl<'a, B: CostBound> BoundedPermutationSearch<'a, B> {
    fn new(matrix: &'a CostMatrix, incumbent: B) -> Self {
        let n = matrix.len();
        Self {
            matrix,
            tasks: Vec::with_capacity(n),
            used: vec![false; n],
            incumbent,
            best: None,
            stats: SearchStats::default(),
        }
    }

    /// Sum over agents `from..n` of their cheapest free task.
    fn remaining_bound(&self, from: usize) -> u64 {
        let n = self.matrix.len();
        (from..n)
            .map(|agent| {
                (0..n)
                    .filter(|&task| !self.used[task])
                    .map(|task| self.matrix.cost(agent, task))
                    .min()
                    .unwrap_or(0)
            })
            .sum()
    }

    fn assign(&mut self, task: usize) {
        self.used[task] = true;
        self.tasks.push(task);
    }

    fn unassign(&mut self, task: usize) {
        self.tasks.pop();
        self.used[task] = false;
    }

    fn descend(&mut self, agent: usize, cost: u64) {
        self.stats.on_node();

        let n = self.matrix.len();
        if agent == n {
            if self.incumbent.offer(cost) {
                self.best = Some((cost, self.tasks.clone()));
                self.stats.on_solution();
            }
            return;
        }

        if self
            .incumbent
            .cannot_improve(cost + self.remaining_bound(agent))
        {
            self.stats.on_prune_bound();
            return;
        }

        for task in 0..n {
            if self.used[task] {
                continue;
            }
            self.assign(task);
            self.descend(agent + 1, cost + self.matrix.cost(agent, task));
            self.unassign(task);
        }
    }
}

impl AssignmentBranchAndBound {
    fn solve_sequential(&self, matrix: &CostMatrix) -> (Option<(u64, Vec<usize>)>, SearchStats) {
        let mut search = BoundedPermutationSearch::new(matrix, LocalBest::default());
        search.descend(0, 0);
        (search.best, search.stats)
    }

    #[cfg(feature = "parallel")]
    fn solve_parallel(&self, matrix: &CostMatrix) -> (Option<(u64, Vec<usize>)>, SearchStats) {
        use crate::search::{cheaper, SharedBest};
        use rayon::prelude::*;
        use std::sync::atomic::AtomicU64;

        let shared = AtomicU64::new(SharedBest::NONE);
        let mut root = SearchStats::default();
        root.on_node();

        let branches: Vec<_> = (0..matrix.len())
            .into_par_iter()
            .map(|task| {
                let mut search = BoundedPermutationSearch::new(matrix, SharedBest::new(&shared));
                search.assign(task);
                search.descend(1, matrix.cost(0, task));
                (search.best, search.stats)
            })
            .collect();

        // sequential merge keeps the lowest task index on equal cost
        let mut best = None;
        for (candidate, stats) in branches {
            root.merge(&stats);
            best = cheaper(best, candidate);
        }
        (best, root)
    }
}

impl AssignmentSolver for AssignmentBranchAndBound {
    fn name(&self) -> &'static str {
        "Branch & Bound"
    }

    fn solve(&self, matrix: &CostMatrix) -> AssignmentResult {
        #[cfg(feature = "parallel")]
        let (best, stats) = if self.config.runs_parallel() {
            self.solve_parallel(matrix)
        } else {
            self.solve_sequential(matrix)
        };
        #[cfg(not(feature = "parallel"))]
        let (best, stats) = self.solve_sequential(matrix);

        let assignment = best.map(|(cost, tasks)| Assignment::from_tasks(cost, &tasks));

        debug!(
            "assignment branch-and-bound: n={} cost={:?} nodes={} pruned={}",
            matrix.len(),
            assignment.as_ref().map(|a| a.cost),
            stats.nodes_explored,
            stats.prunings_bound
        );

        AssignmentResult { assignment, stats }
    }
}
