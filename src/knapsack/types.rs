//! Items, validated item sets, and the knapsack solver contract.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::SolveError;
use crate::search::SearchStats;

/// A candidate item for the knapsack.
///
/// Items are immutable once built. [`Item::new`] does not validate;
/// [`ItemSet::new`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: u64,
    value: u64,
    weight: u64,
}

impl Item {
    /// Creates an item.
    pub fn new(id: u64, value: u64, weight: u64) -> Self {
        Self { id, value, weight }
    }

    /// Caller-assigned identifier, unique within a set.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Value per unit of weight, or `0.0` for a weightless item.
    pub fn ratio(&self) -> f64 {
        if self.weight == 0 {
            0.0
        } else {
            self.value as f64 / self.weight as f64
        }
    }

    /// Compares value/weight ratios exactly by cross-multiplication.
    pub fn cmp_ratio(&self, other: &Item) -> Ordering {
        let lhs = u128::from(self.value) * u128::from(other.weight);
        let rhs = u128::from(other.value) * u128::from(self.weight);
        lhs.cmp(&rhs)
    }
}

/// Ordered, validated collection of items.
///
/// Insertion order is preserved; it is the traversal order of the
/// backtracking and DP solvers and the tie-break order of the
/// ratio sort.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Item>", into = "Vec<Item>")
)]
pub struct ItemSet {
    items: Vec<Item>,
    total_value: u64,
    total_weight: u64,
}

impl ItemSet {
    /// Validates and wraps a list of items.
    ///
    /// # Errors
    ///
    /// - [`SolveError::InvalidItem`] for a zero id, value, or weight
    /// - [`SolveError::DuplicateItemId`] when ids repeat
    /// - [`SolveError::Overflow`] when total value or weight overflows
    pub fn new(items: Vec<Item>) -> Result<Self, SolveError> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut total_value: u64 = 0;
        let mut total_weight: u64 = 0;

        for item in &items {
            let reason = if item.id == 0 {
                Some("id must be at least 1")
            } else if item.value == 0 {
                Some("value must be positive")
            } else if item.weight == 0 {
                Some("weight must be positive")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SolveError::InvalidItem {
                    id: item.id,
                    reason,
                });
            }
            if !seen.insert(item.id) {
                return Err(SolveError::DuplicateItemId(item.id));
            }
            total_value = total_value
                .checked_add(item.value)
                .ok_or(SolveError::Overflow("item values"))?;
            total_weight = total_weight
                .checked_add(item.weight)
                .ok_or(SolveError::Overflow("item weights"))?;
        }

        Ok(Self {
            items,
            total_value,
            total_weight,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Sum of all item values.
    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Copy of the items sorted by ratio, best first.
    ///
    /// The sort is stable: equal ratios keep insertion order.
    pub fn sorted_by_ratio(&self) -> Vec<Item> {
        let mut sorted = self.items.clone();
        sorted.sort_by(|a, b| b.cmp_ratio(a));
        sorted
    }
}

impl TryFrom<Vec<Item>> for ItemSet {
    type Error = SolveError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<ItemSet> for Vec<Item> {
    fn from(set: ItemSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Outcome of a knapsack solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// Total value of the selection.
    pub max_value: u64,

    /// Chosen items, ascending by id.
    pub selected_items: Vec<Item>,

    /// Search counters.
    pub stats: SearchStats,
}

impl KnapsackResult {
    pub(crate) fn new(max_value: u64, mut selected_items: Vec<Item>, stats: SearchStats) -> Self {
        selected_items.sort_by_key(Item::id);
        Self {
            max_value,
            selected_items,
            stats,
        }
    }

    /// Ids of the selected items, ascending.
    pub fn selected_ids(&self) -> Vec<u64> {
        self.selected_items.iter().map(Item::id).collect()
    }

    /// Weight used by the selection.
    pub fn total_weight(&self) -> u64 {
        self.selected_items.iter().map(Item::weight).sum()
    }
}

/// A 0/1 knapsack solver.
///
/// Every implementation is a pure function of `(capacity, items)`.
pub trait KnapsackSolver {
    /// Short display name (e.g. `"DP"`).
    fn name(&self) -> &'static str;

    /// Selects a subset of `items` whose weight fits in `capacity`.
    ///
    /// # Errors
    ///
    /// Only table-based solvers fail, with
    /// [`SolveError::CapacityTooLarge`], when their working memory cannot
    /// be allocated.
    fn solve(&self, capacity: u64, items: &ItemSet) -> Result<KnapsackResult, SolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_exact_comparison() {
        let a = Item::new(1, 60, 10);
        let b = Item::new(2, 100, 20);
        let c = Item::new(3, 12, 2);
        assert!((a.ratio() - 6.0).abs() < 1e-12);
        assert_eq!(a.cmp_ratio(&b), Ordering::Greater);
        assert_eq!(a.cmp_ratio(&c), Ordering::Equal);
        assert_eq!(Item::new(4, 5, 0).ratio(), 0.0);
    }

    #[test]
    fn test_item_set_validation() {
        assert_eq!(
            ItemSet::new(vec![Item::new(1, 0, 3)]).unwrap_err(),
            SolveError::InvalidItem {
                id: 1,
                reason: "value must be positive"
            }
        );
        assert!(matches!(
            ItemSet::new(vec![Item::new(2, 3, 0)]),
            Err(SolveError::InvalidItem { id: 2, .. })
        ));
        assert!(matches!(
            ItemSet::new(vec![Item::new(0, 3, 3)]),
            Err(SolveError::InvalidItem { id: 0, .. })
        ));
        assert_eq!(
            ItemSet::new(vec![Item::new(1, 1, 1), Item::new(1, 2, 2)]).unwrap_err(),
            SolveError::DuplicateItemId(1)
        );
        assert_eq!(
            ItemSet::new(vec![Item::new(1, u64::MAX, 1), Item::new(2, 1, 1)]).unwrap_err(),
            SolveError::Overflow("item values")
        );
    }

    #[test]
    fn test_totals_and_empty_set() {
        let set = ItemSet::new(vec![Item::new(1, 60, 10), Item::new(2, 100, 20)]).unwrap();
        assert_eq!(set.total_value(), 160);
        assert_eq!(set.total_weight(), 30);
        assert!(ItemSet::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_sorted_by_ratio_is_stable() {
        let set = ItemSet::new(vec![
            Item::new(1, 10, 5),
            Item::new(2, 30, 5),
            Item::new(3, 4, 2),
            Item::new(4, 9, 1),
        ])
        .unwrap();
        let ids: Vec<u64> = set.sorted_by_ratio().iter().map(Item::id).collect();
        // items 1 and 3 share ratio 2 and keep insertion order
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_result_sorted_by_id() {
        let result = KnapsackResult::new(
            220,
            vec![Item::new(3, 120, 30), Item::new(2, 100, 20)],
            SearchStats::default(),
        );
        assert_eq!(result.selected_ids(), vec![2, 3]);
        assert_eq!(result.total_weight(), 50);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_item_set_deserializes_through_validation() {
        let set: ItemSet =
            serde_json::from_str(r#"[{"id":1,"value":60,"weight":10},{"id":2,"value":100,"weight":20}]"#)
                .unwrap();
        assert_eq!(set.total_weight(), 30);

        let err = serde_json::from_str::<ItemSet>(r#"[{"id":1,"value":6,"weight":1},{"id":1,"value":7,"weight":2}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1"));
    }
}
