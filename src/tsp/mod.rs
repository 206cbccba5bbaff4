//! Travelling Salesperson Problem.
//!
//! Both solvers search Hamiltonian cycles that start and end at city 1 over
//! a symmetric [`DistanceMatrix`] in which an off-diagonal zero means "no
//! edge":
//!
//! - [`TspBacktracking`]: exhaustive, cut only when a partial path already
//!   costs as much as the best tour
//! - [`TspBranchAndBound`]: cut by a nearest-edge lower bound, optionally
//!   parallel
//!
//! A disconnected instance yields `tour: None` from both.
//!
//! # Examples
//!
//! ```
//! use u_exactopt::tsp::{DistanceMatrix, TspBranchAndBound, TspSolver};
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0, 10, 15, 20],
//!     vec![10, 0, 35, 25],
//!     vec![15, 35, 0, 30],
//!     vec![20, 25, 30, 0],
//! ])?;
//! let result = TspBranchAndBound::new().solve(&matrix);
//! assert_eq!(result.min_cost(), Some(80));
//! assert_eq!(result.best_path().first(), Some(&1));
//! # Ok::<(), u_exactopt::SolveError>(())
//! ```

mod backtracking;
mod bnb;
mod types;

pub use backtracking::TspBacktracking;
pub use bnb::TspBranchAndBound;
pub use types::{DistanceMatrix, Tour, TspResult, TspSolver};
