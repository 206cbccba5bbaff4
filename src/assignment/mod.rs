//! Assignment Problem.
//!
//! Assign each of `n` agents a distinct task so that the summed
//! [`CostMatrix`] entries are minimal.
//!
//! - [`AssignmentBacktracking`]: exhaustive permutation search
//! - [`AssignmentBranchAndBound`]: pruned by the per-agent minimum-cost
//!   bound, optionally parallel
//!
//! # Examples
//!
//! ```
//! use u_exactopt::assignment::{AssignmentBranchAndBound, AssignmentSolver, CostMatrix};
//!
//! let matrix = CostMatrix::new(vec![vec![4, 2, 8], vec![4, 3, 7], vec![3, 1, 6]])?;
//! let result = AssignmentBranchAndBound::new().solve(&matrix);
//! assert_eq!(result.min_cost(), Some(12));
//! assert_eq!(result.best_assignment().len(), 3);
//! # Ok::<(), u_exactopt::SolveError>(())
//! ```

mod backtracking;
mod bnb;
mod types;

pub use backtracking::AssignmentBacktracking;
pub use bnb::AssignmentBranchAndBound;
pub use types::{AgentTask, Assignment, AssignmentResult, AssignmentSolver, CostMatrix};
