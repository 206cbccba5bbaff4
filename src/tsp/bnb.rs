//! Branch-and-bound TSP solver.
//!
//! # Algorithm
//!
//! Same depth-first extension as [`TspBacktracking`](super::TspBacktracking),
//! but every node is first checked against
//!
//! ```text
//! lower_bound = cost + sum(min_edge(c) for c unvisited) + min_edge(start)
//! ```
//!
//! and discarded when `lower_bound >= best`. The remaining edges of any
//! completion enter each unvisited city once and the start city once, and
//! with symmetric distances each of those edges is at least the cheapest
//! edge incident to the city it enters. The bound therefore never exceeds
//! the true completion cost.
//!
//! With [`BranchAndBoundConfig::parallel`] and the `parallel` feature, the
//! choices of second city are explored on rayon workers that share one
//! atomic incumbent cost.

use log::debug;

use super::types::{DistanceMatrix, Tour, TspResult, TspSolver};
use crate::search::{BranchAndBoundConfig, CostBound, LocalBest, SearchStats};

/// Exact solver pruned by the nearest-edge lower bound.
#[derive(Debug, Clone, Default)]
pub struct TspBranchAndBound {
    config: BranchAndBoundConfig,
}

impl TspBranchAndBound {
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

struct BoundedPathSearch<'a, B> {
    matrix: &'a DistanceMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    /// Sum of `min_edge` over unvisited cities.
    unvisited_min: u64,
    /// `min_edge` of the start city, paid for by the closing edge.
    return_min: u64,
    incumbent: B,
    best: Option<(u64, Vec<usize>)>,
    stats: SearchStats,
}

impl<'a, B: CostBound> BoundedPathSearch<'a, B> {
    fn new(matrix: &'a DistanceMatrix, incumbent: B) -> Self {
        let n = matrix.len();
        let mut visited = vec![false; n];
        visited[0] = true;
        let mut path = Vec::with_capacity(n);
        path.push(0);
        let unvisited_min = (1..n).filter_map(|c| matrix.min_edge(c)).sum();

        Self {
            matrix,
            path,
            visited,
            unvisited_min,
            return_min: matrix.min_edge(0).unwrap_or(0),
            incumbent,
            best: None,
            stats: SearchStats::default(),
        }
    }

    fn lower_bound(&self, cost: u64) -> u64 {
        cost + self.unvisited_min + self.return_min
    }

    fn visit(&mut self, city: usize) {
        self.path.push(city);
        self.visited[city] = true;
        self.unvisited_min -= self.matrix.min_edge(city).unwrap_or(0);
    }

    fn unvisit(&mut self, city: usize) {
        self.unvisited_min += self.matrix.min_edge(city).unwrap_or(0);
        self.visited[city] = false;
        self.path.pop();
    }

    fn descend(&mut self, cost: u64) {
        self.stats.on_node();

        if self.incumbent.cannot_improve(self.lower_bound(cost)) {
            self.stats.on_prune_bound();
            return;
        }

        let n = self.matrix.len();
        let last = self.path[self.path.len() - 1];

        if self.path.len() == n {
            match self.matrix.edge(last, self.path[0]) {
                Some(back) => {
                    let total = cost + back;
                    if self.incumbent.offer(total) {
                        self.best = Some((total, self.path.clone()));
                        self.stats.on_solution();
                    }
                }
                None => self.stats.on_prune_infeasible(),
            }
            return;
        }

        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            let Some(d) = self.matrix.edge(last, next) else {
                self.stats.on_prune_infeasible();
                continue;
            };
            self.visit(next);
            self.descend(cost + d);
            self.unvisit(next);
        }
    }
}

impl TspBranchAndBound {
    fn solve_sequential(&self, matrix: &DistanceMatrix) -> (Option<(u64, Vec<usize>)>, SearchStats) {
        let mut search = BoundedPathSearch::new(matrix, LocalBest::default());
        search.descend(0);
        (search.best, search.stats)
    }

    #[cfg(feature = "parallel")]
    fn solve_parallel(&self, matrix: &DistanceMatrix) -> (Option<(u64, Vec<usize>)>, SearchStats) {
        use crate::search::{cheaper, SharedBest};
        use rayon::prelude::*;
        use std::sync::atomic::AtomicU64;

        let shared = AtomicU64::new(SharedBest::NONE);
        let mut root = SearchStats::default();
        root.on_node();

        let seconds: Vec<(usize, u64)> = (1..matrix.len())
            .filter_map(|c| matrix.edge(0, c).map(|d| (c, d)))
            .collect();

        let branches: Vec<_> = seconds
            .par_iter()
            .map(|&(city, d)| {
                let mut search = BoundedPathSearch::new(matrix, SharedBest::new(&shared));
                search.visit(city);
                search.descend(d);
                (search.best, search.stats)
            })
            .collect();

        // sequential merge keeps the lowest-index branch on equal cost
        let mut best = None;
        for (candidate, stats) in branches {
            root.merge(&stats);
            best = cheaper(best, candidate);
        }
        (best, root)
    }
}

impl TspSolver for TspBranchAndBound {
    fn name(&self) -> &'static str {
        "Branch & Bound"
    }

    fn solve(&self, matrix: &DistanceMatrix) -> TspResult {
        #[cfg(feature = "parallel")]
        let (best, stats) = if self.config.runs_parallel() {
            self.solve_parallel(matrix)
        } else {
            self.solve_sequential(matrix)
        };
        #[cfg(not(feature = "parallel"))]
        let (best, stats) = self.solve_sequential(matrix);

        let tour = best.map(|(cost, path)| Tour::from_open_path(cost, &path));

        debug!(
            "tsp branch-and-bound: n={} cost={:?} nodes={} pruned={}",
            matrix.len(),
            tour.as_ref().map(|t| t.cost),
            stats.nodes_explored,
            stats.prunings_bound
        );

        TspResult { tour, stats }
    }
}
