//! Exhaustive Hamiltonian-cycle search.

use log::debug;

use super::types::{DistanceMatrix, Tour, TspResult, TspSolver};
use crate::search::{CostBound, LocalBest, SearchStats};

/// Enumerates every tour from city 1, cutting only partial paths whose
/// length already reaches the best complete tour.
#[derive(Debug, Clone, Copy, Default)]
pub struct TspBacktracking;

struct PathSearch<'a> {
    matrix: &'a DistanceMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    incumbent: LocalBest,
    best_path: Vec<usize>,
    stats: SearchStats,
}

impl PathSearch<'_> {
    fn descend(&mut self, cost: u64) {
        self.stats.on_node();

        if self.incumbent.cannot_improve(cost) {
            self.stats.on_prune_bound();
            return;
        }

        let n = self.matrix.len();
        let last = self.path[self.path.len() - 1];

        if self.path.len() == n {
            match self.matrix.edge(last, self.path[0]) {
                Some(back) => {
                    if self.incumbent.offer(cost + back) {
                        self.best_path.clone_from(&self.path);
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
            self.path.push(next);
            self.visited[next] = true;
            self.descend(cost + d);
            self.visited[next] = false;
            self.path.pop();
        }
    }
}

impl TspSolver for TspBacktracking {
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn solve(&self, matrix: &DistanceMatrix) -> TspResult {
        let n = matrix.len();
        let mut visited = vec![false; n];
        visited[0] = true;
        let mut path = Vec::with_capacity(n);
        path.push(0);

        let mut search = PathSearch {
            matrix,
            path,
            visited,
            incumbent: LocalBest::default(),
            best_path: Vec::new(),
            stats: SearchStats::default(),
        };
        search.descend(0);

        let tour = search
            .incumbent
            .best()
            .map(|cost| Tour::from_open_path(cost, &search.best_path));

        debug!(
            "tsp backtracking: n={n} cost={:?} nodes={}",
            tour.as_ref().map(|t| t.cost),
            search.stats.nodes_explored
        );

        TspResult {
            tour,
            stats: search.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtracking_equal_triangle() {
        let m = DistanceMatrix::new(vec![vec![0, 7, 7], vec![7, 0, 7], vec![7, 7, 0]]).unwrap();
        let result = TspBacktracking.solve(&m);
        assert_eq!(result.min_cost(), Some(21));
        assert_eq!(result.best_path(), &[1, 2, 3, 1]);
    }

    #[test]
    fn test_backtracking_unique_cycle() {
        // only the ring 1-2-3-4-1 is a Hamiltonian cycle
        let m = DistanceMatrix::new(vec![
            vec![0, 10, 0, 25],
            vec![10, 0, 15, 0],
            vec![0, 15, 0, 20],
            vec![25, 0, 20, 0],
        ])
        .unwrap();
        let result = TspBacktracking.solve(&m);
        assert_eq!(result.min_cost(), Some(70));
        assert_eq!(result.best_path(), &[1, 2, 3, 4, 1]);
    }

    #[test]
    fn test_backtracking_no_tour() {
        // city 4 hangs off city 1 only
        let m = DistanceMatrix::new(vec![
            vec![0, 5, 5, 4],
            vec![5, 0, 5, 0],
            vec![5, 5, 0, 0],
            vec![4, 0, 0, 0],
        ])
        .unwrap();
        let result = TspBacktracking.solve(&m);
        assert_eq!(result.min_cost(), None);
        assert!(result.best_path().is_empty());
        assert_eq!(result.stats.solutions_found, 0);
    }

    #[test]
    fn test_backtracking_does_not_mutate_matrix() {
        let rows = vec![vec![0, 3, 4], vec![3, 0, 5], vec![4, 5, 0]];
        let m = DistanceMatrix::new(rows.clone()).unwrap();
        let first = TspBacktracking.solve(&m);
        let second = TspBacktracking.solve(&m);
        assert_eq!(m.to_rows(), rows);
        assert_eq!(first, second);
    }
}
