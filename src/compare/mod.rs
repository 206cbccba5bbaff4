//! Exact-versus-heuristic comparison harness.
//!
//! Runs every solver of a problem family on the same instance, times each
//! call, and summarizes the trade-off: which exact method was fastest, how
//! close greedy came, and whether bounding paid off against plain
//! backtracking.
//!
//! # Examples
//!
//! ```
//! use u_exactopt::compare::{ComparisonConfig, ComparisonRunner};
//! use u_exactopt::knapsack::{Item, ItemSet};
//!
//! let items = ItemSet::new(vec![
//!     Item::new(1, 60, 10),
//!     Item::new(2, 100, 20),
//!     Item::new(3, 120, 30),
//! ])?;
//! let cmp = ComparisonRunner::knapsack(50, &items, &ComparisonConfig::default())?;
//! assert_eq!(cmp.optimal_value(), 220);
//! assert!(!cmp.greedy_optimal());
//! println!("{cmp}");
//! # Ok::<(), u_exactopt::SolveError>(())
//! ```

mod config;
mod runner;

pub use config::ComparisonConfig;
pub use runner::{
    AssignmentComparison, ComparisonRunner, KnapsackComparison, MinCost, MinimizationComparison,
    Timed, TspComparison,
};
