//! Cost matrices, assignments, and the assignment solver contract.

use std::fmt;

use crate::error::SolveError;
use crate::matrix::SquareMatrix;
use crate::search::SearchStats;

/// Agent-by-task cost matrix with strictly positive entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")
)]
pub struct CostMatrix {
    inner: SquareMatrix,
}

impl CostMatrix {
    /// Smallest number of agents accepted.
    pub const MIN_AGENTS: usize = 2;

    /// Validates and wraps nested rows (`rows[agent][task]`).
    ///
    /// # Errors
    ///
    /// [`SolveError::NotSquare`], [`SolveError::TooSmall`],
    /// [`SolveError::NonPositiveCost`], or [`SolveError::Overflow`].
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self, SolveError> {
        let inner = SquareMatrix::from_rows(rows)?;
        let n = inner.len();
        if n < Self::MIN_AGENTS {
            return Err(SolveError::TooSmall {
                min: Self::MIN_AGENTS,
                actual: n,
            });
        }
        for row in 0..n {
            if let Some(col) = inner.row(row).iter().position(|&c| c == 0) {
                return Err(SolveError::NonPositiveCost { row, col });
            }
        }
        Ok(Self { inner })
    }

    /// Number of agents (and tasks).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Cost of giving `task` to `agent`.
    #[inline]
    pub fn cost(&self, agent: usize, task: usize) -> u64 {
        self.inner.get(agent, task)
    }

    /// Copies the costs back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.inner.to_rows()
    }
}

impl TryFrom<Vec<Vec<u64>>> for CostMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<u64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

/// One agent-to-task pair, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentTask {
    /// 1-based agent index (matrix row).
    pub agent: usize,

    /// 1-based task index (matrix column).
    pub task: usize,
}

impl fmt::Display for AgentTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Agent {} \u{2192} Task {}", self.agent, self.task)
    }
}

/// A perfect matching of agents to tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Sum of the chosen costs.
    pub cost: u64,

    /// Pairs ordered by agent.
    pub pairs: Vec<AgentTask>,
}

impl Assignment {
    /// Builds an assignment from zero-based `tasks[agent]`.
    pub(crate) fn from_tasks(cost: u64, tasks: &[usize]) -> Self {
        let pairs = tasks
            .iter()
            .enumerate()
            .map(|(agent, &task)| AgentTask {
                agent: agent + 1,
                task: task + 1,
            })
            .collect();
        Self { cost, pairs }
    }
}

/// Outcome of an assignment solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    /// Cheapest assignment, `None` when no perfect assignment exists.
    pub assignment: Option<Assignment>,

    /// Search counters.
    pub stats: SearchStats,
}

impl AssignmentResult {
    /// Total cost, `None` for "no solution".
    pub fn min_cost(&self) -> Option<u64> {
        self.assignment.as_ref().map(|a| a.cost)
    }

    /// Agent-ordered pairs; empty when there is no solution.
    pub fn best_assignment(&self) -> &[AgentTask] {
        self.assignment
            .as_ref()
            .map(|a| a.pairs.as_slice())
            .unwrap_or_default()
    }
}

/// An assignment-problem solver.
pub trait AssignmentSolver {
    /// Short display name.
    fn name(&self) -> &'static str;

    /// Assigns each agent a distinct task at minimum total cost.
    fn solve(&self, matrix: &CostMatrix) -> AssignmentResult;
}
