//! Exhaustive include/exclude enumeration.

use log::debug;

use super::subset::walk_subsets;
use super::types::{Item, ItemSet, KnapsackResult, KnapsackSolver};
use crate::error::SolveError;
use crate::search::SearchStats;

/// Explores every feasible subset, deciding items in insertion order.
///
/// The only cut is feasibility: an item is never included when it would
/// exceed the capacity. `O(2^n)` nodes in the worst case.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackBacktracking;

impl KnapsackSolver for KnapsackBacktracking {
    fn name(&self) -> &'static str {
        "BT"
    }

    fn solve(&self, capacity: u64, items: &ItemSet) -> Result<KnapsackResult, SolveError> {
        let n = items.len();
        let mut stats = SearchStats::default();
        let mut best_value = 0;
        let mut best_items: Vec<Item> = Vec::new();

        walk_subsets(items.as_slice(), capacity, &mut stats, |node, stats| {
            if node.index == n && node.value > best_value {
                best_value = node.value;
                best_items.clear();
                best_items.extend_from_slice(node.chosen);
                stats.on_solution();
            }
            true
        });

        debug!(
            "knapsack backtracking: value={best_value} nodes={}",
            stats.nodes_explored
        );

        Ok(KnapsackResult::new(best_value, best_items, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::random_items;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_backtracking_classic_instance() {
        let items = ItemSet::new(vec![
            Item::new(1, 60, 10),
            Item::new(2, 100, 20),
            Item::new(3, 120, 30),
        ])
        .unwrap();
        let result = KnapsackBacktracking.solve(50, &items).unwrap();
        assert_eq!(result.max_value, 220);
        assert_eq!(result.selected_ids(), vec![2, 3]);
    }

    #[test]
    fn test_backtracking_visits_full_tree_when_everything_fits() {
        let items = ItemSet::new(vec![
            Item::new(1, 1, 1),
            Item::new(2, 2, 1),
            Item::new(3, 3, 1),
        ])
        .unwrap();
        let result = KnapsackBacktracking.solve(3, &items).unwrap();
        assert_eq!(result.max_value, 6);
        // complete binary tree of depth 3
        assert_eq!(result.stats.nodes_explored, 15);
        assert_eq!(result.stats.prunings_bound, 0);
    }

    #[test]
    fn test_backtracking_zero_capacity() {
        let items = ItemSet::new(vec![Item::new(1, 5, 2)]).unwrap();
        let result = KnapsackBacktracking.solve(0, &items).unwrap();
        assert_eq!(result.max_value, 0);
        assert!(result.selected_items.is_empty());
        assert_eq!(result.stats.prunings_infeasible, 1);
    }

    #[test]
    fn test_backtracking_first_optimum_wins_on_tie() {
        // {1} and {2} both reach value 5; include-first order finds {1}
        let items = ItemSet::new(vec![Item::new(1, 5, 3), Item::new(2, 5, 3)]).unwrap();
        let result = KnapsackBacktracking.solve(3, &items).unwrap();
        assert_eq!(result.max_value, 5);
        assert_eq!(result.selected_ids(), vec![1]);
    }

    #[test]
    fn test_backtracking_deep_item_set_at_zero_capacity() {
        let mut rng = StdRng::seed_from_u64(17);
        let items = random_items(50_000, &mut rng).unwrap();
        let result = KnapsackBacktracking.solve(0, &items).unwrap();
        assert_eq!(result.max_value, 0);
        // nothing fits, so the tree is a single path
        assert_eq!(result.stats.nodes_explored, 50_001);
    }
}
