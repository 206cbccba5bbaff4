//! Exhaustive permutation search.

use log::debug;

use super::types::{Assignment, AssignmentResult, AssignmentSolver, CostMatrix};
use crate::search::{CostBound, LocalBest, SearchStats};

/// Assigns agents in index order, trying every free task, and cuts partial
/// assignments whose cost already reaches the best complete one.
/// `O(n!)` in the worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentBacktracking;

struct PermutationSearch<'a> {
    matrix: &'a CostMatrix,
    tasks: Vec<usize>,
    used: Vec<bool>,
    incumbent: LocalBest,
    best_tasks: Vec<usize>,
    stats: SearchStats,
}

impl PermutationSearch<'_> {
    fn descend(&mut self, agent: usize, cost: u64) {
        self.stats.on_node();

        if self.incumbent.cannot_improve(cost) {
            self.stats.on_prune_bound();
            return;
        }

        let n = self.matrix.len();
        if agent == n {
            if self.incumbent.offer(cost) {
                self.best_tasks.clone_from(&self.tasks);
                self.stats.on_solution();
            }
            return;
        }

        for task in 0..n {
            if self.used[task] {
                continue;
            }
            self.used[task] = true;
            self.tasks.push(task);
            self.descend(agent + 1, cost + self.matrix.cost(agent, task));
            self.tasks.pop();
            self.used[task] = false;
        }
    }
}

impl AssignmentSolver for AssignmentBacktracking {
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn solve(&self, matrix: &CostMatrix) -> AssignmentResult {
        let n = matrix.len();
        let mut search = PermutationSearch {
            matrix,
            tasks: Vec::with_capacity(n),
            used: vec![false; n],
            incumbent: LocalBest::default(),
            best_tasks: Vec::new(),
            stats: SearchStats::default(),
        };
        search.descend(0, 0);

        let assignment = search
            .incumbent
            .best()
            .map(|cost| Assignment::from_tasks(cost, &search.best_tasks));

        debug!(
            "assignment backtracking: n={n} cost={:?} nodes={}",
            assignment.as_ref().map(|a| a.cost),
            search.stats.nodes_explored
        );

        AssignmentResult {
            assignment,
            stats: search.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AgentTask;

    #[test]
    fn test_backtracking_two_agents() {
        let m = CostMatrix::new(vec![vec![5, 1], vec![2, 7]]).unwrap();
        let result = AssignmentBacktracking.solve(&m);
        assert_eq!(result.min_cost(), Some(3));
        assert_eq!(
            result.best_assignment(),
            &[
                AgentTask { agent: 1, task: 2 },
                AgentTask { agent: 2, task: 1 }
            ]
        );
    }

    #[test]
    fn test_backtracking_three_agents() {
        // permutations: 4+3+6=13, 4+7+1=12, 2+4+6=12, 2+7+3=12, 8+4+1=13, 8+3+3=14
        let m = CostMatrix::new(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]]).unwrap();
        let result = AssignmentBacktracking.solve(&m);
        assert_eq!(result.min_cost(), Some(12));
        // first optimum in task order for agent 1
        assert_eq!(result.best_assignment()[0], AgentTask { agent: 1, task: 1 });
    }

    #[test]
    fn test_backtracking_uniform_costs() {
        let m = CostMatrix::new(vec![vec![3; 4]; 4]).unwrap();
        let result = AssignmentBacktracking.solve(&m);
        assert_eq!(result.min_cost(), Some(12));
        // once the identity is found every other leaf ties and is cut
        assert_eq!(result.stats.solutions_found, 1);
    }
}
