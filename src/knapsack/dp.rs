//! Dynamic-programming knapsack solver.
//!
//! # Algorithm
//!
//! `table[i][w]` holds the best value achievable with the first `i` items
//! under weight budget `w`:
//!
//! ```text
//! table[i][w] = table[i-1][w]                                  if weight_i > w
//!             = max(table[i-1][w], value_i + table[i-1][w - weight_i])   otherwise
//! ```
//!
//! The selection is recovered by walking `i` from `n` down to 1 and taking
//! item `i` whenever `table[i][w] != table[i-1][w]`.
//!
//! Runs in `O(n * C)` time and space, where `C` is the capacity clamped to
//! the total item weight.

use log::debug;

use super::types::{ItemSet, KnapsackResult, KnapsackSolver};
use crate::error::SolveError;
use crate::search::SearchStats;

/// Exact pseudo-polynomial solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackDp;

impl KnapsackSolver for KnapsackDp {
    fn name(&self) -> &'static str {
        "DP"
    }

    fn solve(&self, capacity: u64, items: &ItemSet) -> Result<KnapsackResult, SolveError> {
        let n = items.len();
        let too_large = || SolveError::CapacityTooLarge {
            capacity,
            items: n,
        };

        // Budgets beyond the total weight all share the same column.
        let cap = usize::try_from(capacity.min(items.total_weight())).map_err(|_| too_large())?;
        let width = cap.checked_add(1).ok_or_else(too_large)?;
        let cells = width.checked_mul(n + 1).ok_or_else(too_large)?;

        let mut table: Vec<u64> = Vec::new();
        table.try_reserve_exact(cells).map_err(|_| too_large())?;
        table.resize(cells, 0);

        let mut stats = SearchStats::default();

        for (i, item) in items.iter().enumerate() {
            let (prev, curr) = table.split_at_mut((i + 1) * width);
            let prev = &prev[i * width..];
            let curr = &mut curr[..width];
            for w in 0..width {
                stats.on_node();
                curr[w] = match usize::try_from(item.weight()) {
                    Ok(iw) if iw <= w => prev[w].max(item.value() + prev[w - iw]),
                    _ => prev[w],
                };
            }
        }

        let mut selected = Vec::new();
        let mut w = cap;
        for i in (1..=n).rev() {
            if w == 0 {
                break;
            }
            if table[i * width + w] != table[(i - 1) * width + w] {
                let item = items.as_slice()[i - 1];
                // the item was taken, so its weight is at most w
                w -= item.weight() as usize;
                selected.push(item);
            }
        }

        let max_value = table[n * width + cap];
        stats.on_solution();
        debug!(
            "knapsack dp: n={n} capacity={capacity} value={max_value} cells={}",
            stats.nodes_explored
        );

        Ok(KnapsackResult::new(max_value, selected, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Item;

    fn classic() -> ItemSet {
        ItemSet::new(vec![
            Item::new(1, 60, 10),
            Item::new(2, 100, 20),
            Item::new(3, 120, 30),
        ])
        .unwrap()
    }

    #[test]
    fn test_dp_classic_instance() {
        let result = KnapsackDp.solve(50, &classic()).unwrap();
        assert_eq!(result.max_value, 220);
        assert_eq!(result.selected_ids(), vec![2, 3]);
        assert_eq!(result.total_weight(), 50);
    }

    #[test]
    fn test_dp_zero_capacity() {
        let result = KnapsackDp.solve(0, &classic()).unwrap();
        assert_eq!(result.max_value, 0);
        assert!(result.selected_items.is_empty());
    }

    #[test]
    fn test_dp_capacity_above_total_weight_takes_everything() {
        let result = KnapsackDp.solve(u64::MAX, &classic()).unwrap();
        assert_eq!(result.max_value, 280);
        assert_eq!(result.selected_ids(), vec![1, 2, 3]);
        // table clamped to total weight 60
        assert_eq!(result.stats.nodes_explored, 3 * 61);
    }

    #[test]
    fn test_dp_empty_item_set() {
        let items = ItemSet::new(Vec::new()).unwrap();
        let result = KnapsackDp.solve(10, &items).unwrap();
        assert_eq!(result.max_value, 0);
        assert!(result.selected_items.is_empty());
    }

    #[test]
    fn test_dp_items_heavier_than_capacity_skipped() {
        let items = ItemSet::new(vec![Item::new(1, 500, 40), Item::new(2, 7, 3)]).unwrap();
        let result = KnapsackDp.solve(10, &items).unwrap();
        assert_eq!(result.max_value, 7);
        assert_eq!(result.selected_ids(), vec![2]);
    }
}
