//! Include/exclude traversal shared by the exhaustive knapsack solvers.
//!
//! The tree is walked depth-first with an explicit stack of frames, so
//! depth is bounded by heap memory rather than the thread stack. Item
//! `index` is always tried included before excluded.

use super::types::Item;
use crate::search::SearchStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Enter,
    Included,
    Excluded,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    index: usize,
    weight: u64,
    value: u64,
    phase: Phase,
}

impl Frame {
    fn enter(index: usize, weight: u64, value: u64) -> Self {
        Self {
            index,
            weight,
            value,
            phase: Phase::Enter,
        }
    }
}

/// A node of the tree: items `..index` are decided, `chosen` were taken.
#[derive(Debug, Clone, Copy)]
pub(super) struct Node<'a> {
    pub index: usize,
    pub weight: u64,
    pub value: u64,
    pub chosen: &'a [Item],
}

/// Walks every feasible subset of `items` within `capacity`.
///
/// `visit` runs once per node and returns whether to branch on
/// `items[node.index]`. Leaves never branch. Nodes and infeasible
/// inclusions are counted here; bound prunings and solutions are the
/// visitor's to record.
pub(super) fn walk_subsets<F>(
    items: &[Item],
    capacity: u64,
    stats: &mut SearchStats,
    mut visit: F,
) where
    F: FnMut(&Node<'_>, &mut SearchStats) -> bool,
{
    let mut chosen: Vec<Item> = Vec::with_capacity(items.len());
    let mut stack = Vec::with_capacity(items.len() + 1);
    stack.push(Frame::enter(0, 0, 0));

    while let Some(&frame) = stack.last() {
        let top = stack.len() - 1;
        let Frame {
            index,
            weight,
            value,
            phase,
        } = frame;

        match phase {
            Phase::Enter => {
                stats.on_node();
                let node = Node {
                    index,
                    weight,
                    value,
                    chosen: &chosen,
                };
                if !visit(&node, stats) || index == items.len() {
                    stack.pop();
                    continue;
                }

                let item = items[index];
                if weight + item.weight() <= capacity {
                    stack[top].phase = Phase::Included;
                    chosen.push(item);
                    stack.push(Frame::enter(
                        index + 1,
                        weight + item.weight(),
                        value + item.value(),
                    ));
                } else {
                    stats.on_prune_infeasible();
                    stack[top].phase = Phase::Excluded;
                    stack.push(Frame::enter(index + 1, weight, value));
                }
            }
            Phase::Included => {
                chosen.pop();
                stack[top].phase = Phase::Excluded;
                stack.push(Frame::enter(index + 1, weight, value));
            }
            Phase::Excluded => {
                stack.pop();
            }
        }
    }
}
