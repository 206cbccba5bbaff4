//! 0/1 Knapsack.
//!
//! Four solvers share the [`KnapsackSolver`] contract:
//!
//! - [`KnapsackDp`]: exact tabulation, `O(n * capacity)`
//! - [`KnapsackGreedy`]: ratio-descending heuristic, no optimality guarantee
//! - [`KnapsackBacktracking`]: exhaustive include/exclude enumeration
//! - [`KnapsackBranchAndBound`]: enumeration pruned by the fractional
//!   relaxation bound
//!
//! The three exact solvers always agree on `max_value`. When several
//! subsets reach it, each returns the first one its traversal meets.
//!
//! # Examples
//!
//! ```
//! use u_exactopt::knapsack::{Item, ItemSet, KnapsackDp, KnapsackSolver};
//!
//! let items = ItemSet::new(vec![
//!     Item::new(1, 60, 10),
//!     Item::new(2, 100, 20),
//!     Item::new(3, 120, 30),
//! ])?;
//! let result = KnapsackDp.solve(50, &items)?;
//! assert_eq!(result.max_value, 220);
//! assert_eq!(result.selected_ids(), vec![2, 3]);
//! # Ok::<(), u_exactopt::SolveError>(())
//! ```

mod backtracking;
mod bnb;
mod dp;
mod greedy;
mod subset;
mod types;

pub use backtracking::KnapsackBacktracking;
pub use bnb::KnapsackBranchAndBound;
pub use dp::KnapsackDp;
pub use greedy::KnapsackGreedy;
pub use types::{Item, ItemSet, KnapsackResult, KnapsackSolver};
