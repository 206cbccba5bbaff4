//! Branch-and-bound knapsack solver.
//!
//! # Algorithm
//!
//! Items are first sorted by value/weight ratio, best first. The search
//! then makes the same include/exclude decisions as
//! [`KnapsackBacktracking`](super::KnapsackBacktracking), recording the
//! incumbent at every node, and cuts a node when
//!
//! ```text
//! value + relaxation(remaining items, remaining capacity) <= best
//! ```
//!
//! The fractional bound is the LP relaxation of the remaining subproblem:
//! in ratio order, items are taken whole until one no longer fits, and that
//! item contributes the fraction that fills the leftover capacity. Taken in
//! ratio order this is the optimum of the relaxation and therefore never
//! below any integral completion. Values are integers, so the bound is
//! floored without losing admissibility.
//!
//! # Reference
//!
//! Horowitz, E. & Sahni, S. (1974). "Computing Partitions with Applications
//! to the Knapsack Problem", *JACM* 21(2), 277-292.

use log::debug;

use super::subset::walk_subsets;
use super::types::{Item, ItemSet, KnapsackResult, KnapsackSolver};
use crate::error::SolveError;
use crate::search::SearchStats;

/// Exact solver pruned by the fractional relaxation bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackBranchAndBound;

/// Fractional-relaxation bound over items sorted by ratio, best first.
///
/// Prefix sums of weight and value let each query find the first item that
/// no longer fits by binary search.
struct RelaxationBound<'a> {
    items: &'a [Item],
    weight_prefix: Vec<u64>,
    value_prefix: Vec<u64>,
}

impl<'a> RelaxationBound<'a> {
    /// `items` must be sorted by ratio, best first, and come from a
    /// validated [`ItemSet`] so that the prefix sums cannot overflow.
    fn new(items: &'a [Item]) -> Self {
        let mut weight_prefix = Vec::with_capacity(items.len() + 1);
        let mut value_prefix = Vec::with_capacity(items.len() + 1);
        weight_prefix.push(0);
        value_prefix.push(0);
        let (mut weight, mut value) = (0u64, 0u64);
        for item in items {
            weight += item.weight();
            value += item.value();
            weight_prefix.push(weight);
            value_prefix.push(value);
        }
        Self {
            items,
            weight_prefix,
            value_prefix,
        }
    }

    /// Floor of the relaxation value of `items[start..]` within `room`.
    fn bound(&self, start: usize, room: u64) -> u64 {
        let limit = u128::from(self.weight_prefix[start]) + u128::from(room);
        // last prefix that still fits; prefix[start] always does
        let end = start
            + self.weight_prefix[start..].partition_point(|&w| u128::from(w) <= limit)
            - 1;

        let whole = self.value_prefix[end] - self.value_prefix[start];
        let Some(next) = self.items.get(end) else {
            return whole;
        };
        let left = limit - u128::from(self.weight_prefix[end]);
        let part = u128::from(next.value()) * left / u128::from(next.weight());
        // left < weight, so part < value
        whole + part as u64
    }
}

impl KnapsackSolver for KnapsackBranchAndBound {
    fn name(&self) -> &'static str {
        "B&B"
    }

    fn solve(&self, capacity: u64, items: &ItemSet) -> Result<KnapsackResult, SolveError> {
        let sorted = items.sorted_by_ratio();
        let relaxation = RelaxationBound::new(&sorted);
        let mut stats = SearchStats::default();
        let mut best_value = 0;
        let mut best_items: Vec<Item> = Vec::new();
        // Length of the incumbent selection while it is still a prefix of
        // the next node's `chosen`; the copy waits until the dive stops.
        let mut pending: Option<usize> = None;

        walk_subsets(&sorted, capacity, &mut stats, |node, stats| {
            let improved = node.value > best_value;
            if improved {
                best_value = node.value;
                stats.on_solution();
            } else if let Some(len) = pending.take() {
                best_items.clear();
                best_items.extend_from_slice(&node.chosen[..len]);
            }

            let branch = node.index < sorted.len() && {
                let bound = node.value + relaxation.bound(node.index, capacity - node.weight);
                if bound <= best_value {
                    stats.on_prune_bound();
                }
                bound > best_value
            };

            if improved {
                // the first child visited extends this node's selection
                pending = branch.then_some(node.chosen.len());
                if !branch {
                    best_items.clear();
                    best_items.extend_from_slice(node.chosen);
                }
            }
            branch
        });

        debug!(
            "knapsack branch-and-bound: value={best_value} nodes={} pruned={}",
            stats.nodes_explored, stats.prunings_bound
        );

        Ok(KnapsackResult::new(best_value, best_items, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::random_items;
    use crate::knapsack::{KnapsackBacktracking, KnapsackDp, KnapsackGreedy};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn classic() -> ItemSet {
        ItemSet::new(vec![
            Item::new(1, 60, 10),
            Item::new(2, 100, 20),
            Item::new(3, 120, 30),
        ])
        .unwrap()
    }

    #[test]
    fn test_bnb_classic_instance() {
        let result = KnapsackBranchAndBound.solve(50, &classic()).unwrap();
        assert_eq!(result.max_value, 220);
        assert_eq!(result.selected_ids(), vec![2, 3]);
    }

    #[test]
    fn test_fractional_bound_takes_fraction_of_first_misfit() {
        let items = classic().sorted_by_ratio();
        let relaxation = RelaxationBound::new(&items);
        // 60 + 100 + 120 * 20/30
        assert_eq!(relaxation.bound(0, 50), 240);
        assert_eq!(relaxation.bound(1, 25), 100 + 20);
        assert_eq!(relaxation.bound(0, 0), 0);
        assert_eq!(relaxation.bound(3, 100), 0);
        assert_eq!(relaxation.bound(0, 1_000), 280);
    }

    #[test]
    fn test_fractional_bound_floors() {
        let items = vec![Item::new(1, 10, 3)];
        // 10 * 2/3 = 6.67
        assert_eq!(RelaxationBound::new(&items).bound(0, 2), 6);
    }

    #[test]
    fn test_bnb_prunes_on_classic_instance() {
        let bt = KnapsackBacktracking.solve(50, &classic()).unwrap();
        let bnb = KnapsackBranchAndBound.solve(50, &classic()).unwrap();
        assert!(bnb.stats.prunings_bound > 0);
        assert!(bnb.stats.nodes_explored < bt.stats.nodes_explored);
    }

    #[test]
    fn test_bnb_zero_capacity() {
        let result = KnapsackBranchAndBound.solve(0, &classic()).unwrap();
        assert_eq!(result.max_value, 0);
        assert!(result.selected_items.is_empty());
    }

    #[test]
    fn test_bnb_insertion_order_against_ratio() {
        // low-ratio item first in insertion order must not weaken the bound
        let items = ItemSet::new(vec![
            Item::new(1, 10, 10),
            Item::new(2, 90, 10),
            Item::new(3, 85, 10),
        ])
        .unwrap();
        let result = KnapsackBranchAndBound.solve(20, &items).unwrap();
        assert_eq!(result.max_value, 175);
        assert_eq!(result.selected_ids(), vec![2, 3]);
    }

    #[test]
    fn test_bnb_repeatable() {
        let items = classic();
        let first = KnapsackBranchAndBound.solve(50, &items).unwrap();
        let second = KnapsackBranchAndBound.solve(50, &items).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bnb_deep_item_set() {
        let mut rng = StdRng::seed_from_u64(23);
        let items = random_items(50_000, &mut rng).unwrap();
        let capacity = items.total_weight() / 2;
        let greedy = KnapsackGreedy.solve(capacity, &items).unwrap();
        let bnb = KnapsackBranchAndBound.solve(capacity, &items).unwrap();
        assert!(greedy.max_value <= bnb.max_value);
        assert!(bnb.total_weight() <= capacity);
    }

    /// Whole items in order until one misfits, then its floored fraction.
    fn linear_fill(items: &[Item], start: usize, mut room: u64) -> u64 {
        let mut bound = 0;
        for item in &items[start..] {
            if item.weight() <= room {
                bound += item.value();
                room -= item.weight();
            } else {
                bound += item.value() * room / item.weight();
                break;
            }
        }
        bound
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec((1u64..60, 1u64..25), 0..11).prop_map(|pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (v, w))| Item::new(i as u64 + 1, v, w))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_bnb_matches_backtracking_and_dp(items in arb_items(), capacity in 0u64..80) {
            let items = ItemSet::new(items).unwrap();
            let dp = KnapsackDp.solve(capacity, &items).unwrap();
            let bt = KnapsackBacktracking.solve(capacity, &items).unwrap();
            let bnb = KnapsackBranchAndBound.solve(capacity, &items).unwrap();

            prop_assert_eq!(dp.max_value, bt.max_value);
            prop_assert_eq!(bt.max_value, bnb.max_value);

            let greedy = KnapsackGreedy.solve(capacity, &items).unwrap();
            prop_assert!(greedy.max_value <= dp.max_value);

            for result in [&dp, &bt, &bnb, &greedy] {
                prop_assert!(result.total_weight() <= capacity);
                let value: u64 = result.selected_items.iter().map(Item::value).sum();
                prop_assert_eq!(value, result.max_value);
            }
        }

        #[test]
        fn prop_fractional_bound_is_admissible(items in arb_items(), capacity in 0u64..80) {
            let items = ItemSet::new(items).unwrap();
            let sorted = items.sorted_by_ratio();
            let exact = KnapsackDp.solve(capacity, &items).unwrap();
            prop_assert!(RelaxationBound::new(&sorted).bound(0, capacity) >= exact.max_value);
        }

        #[test]
        fn prop_bound_matches_linear_fill(items in arb_items(), room in 0u64..120) {
            let sorted = ItemSet::new(items).unwrap().sorted_by_ratio();
            let relaxation = RelaxationBound::new(&sorted);
            for start in 0..=sorted.len() {
                prop_assert_eq!(relaxation.bound(start, room), linear_fill(&sorted, start, room));
            }
        }
    }
}
