//! Ratio-greedy knapsack heuristic.

use log::debug;

use super::types::{ItemSet, KnapsackResult, KnapsackSolver};
use crate::error::SolveError;
use crate::search::SearchStats;

/// Takes items in descending value/weight ratio while they still fit.
///
/// `O(n log n)`. Not guaranteed optimal; its value never exceeds the exact
/// optimum. Items with equal ratios are scanned in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackGreedy;

impl KnapsackSolver for KnapsackGreedy {
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn solve(&self, capacity: u64, items: &ItemSet) -> Result<KnapsackResult, SolveError> {
        let mut stats = SearchStats::default();
        let mut value = 0;
        let mut weight = 0;
        let mut selected = Vec::new();

        for item in items.sorted_by_ratio() {
            stats.on_node();
            if weight + item.weight() <= capacity {
                weight += item.weight();
                value += item.value();
                selected.push(item);
            } else {
                stats.on_prune_infeasible();
            }
        }

        stats.on_solution();
        debug!("knapsack greedy: capacity={capacity} value={value} weight={weight}");

        Ok(KnapsackResult::new(value, selected, stats))
    }
}
