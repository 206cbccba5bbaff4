//! Exact and heuristic solvers for three classical combinatorial problems.
//!
//! Each problem family offers competing strategies so that exact and
//! heuristic methods, and bounded and unbounded search, can be compared on
//! the same instance:
//!
//! - **0/1 Knapsack** ([`knapsack`]): dynamic programming, ratio greedy,
//!   backtracking, and branch-and-bound with a fractional relaxation bound.
//! - **Travelling Salesperson** ([`tsp`]): backtracking and
//!   branch-and-bound with a nearest-edge lower bound.
//! - **Assignment** ([`assignment`]): backtracking and branch-and-bound
//!   with a per-agent minimum-cost lower bound.
//!
//! Every solver is a synchronous pure function of its validated input.
//! Search state (incumbent, partial path, visited markers) lives in a
//! context owned by one call, so concurrent calls never interfere.
//!
//! The [`compare`] module times all solvers of a family on one instance
//! and summarizes the outcome; [`generate`] builds random instances.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for inputs, results and config.
//!   Inputs deserialize through their validating constructors.
//! - `parallel`: rayon-parallel branch-and-bound for TSP and assignment.
//! - `wasm`: `wasm-bindgen` entry points taking and returning JSON values.
//!
//! # Architecture
//!
//! Solver families share nothing but [`search`] bookkeeping and the
//! [`matrix`] storage type. Nothing in the crate installs a logger; solvers
//! report through the `log` facade at debug level.

pub mod assignment;
pub mod compare;
pub mod error;
pub mod generate;
pub mod knapsack;
pub mod matrix;
pub mod search;
pub mod tsp;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::SolveError;
