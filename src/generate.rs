//! Random instance generators.
//!
//! The value ranges match the defaults an interactive front end offers:
//! TSP distances in `10..=60`, assignment costs in `1..=50`.

use rand::Rng;

use crate::assignment::CostMatrix;
use crate::error::SolveError;
use crate::knapsack::{Item, ItemSet};
use crate::tsp::DistanceMatrix;

/// `n` items with ids `1..=n`, values in `1..=100`, weights in `1..=50`.
pub fn random_items<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<ItemSet, SolveError> {
    let items: Vec<Item> = (1..=n as u64)
        .map(|id| Item::new(id, rng.random_range(1..=100), rng.random_range(1..=50)))
        .collect();
    ItemSet::new(items)
}

/// Complete symmetric `n x n` distance matrix, distances in `10..=60`.
///
/// # Errors
///
/// [`SolveError::TooSmall`] for fewer than three cities.
pub fn random_distance_matrix<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<DistanceMatrix, SolveError> {
    let mut rows = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = rng.random_range(10..=60);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    DistanceMatrix::new(rows)
}

/// `n x n` cost matrix with entries in `1..=50`.
///
/// # Errors
///
/// [`SolveError::TooSmall`] for fewer than two agents.
pub fn random_cost_matrix<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<CostMatrix, SolveError> {
    let rows: Vec<Vec<u64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.random_range(1..=50)).collect::<Vec<_>>())
        .collect();
    CostMatrix::new(rows)
}
