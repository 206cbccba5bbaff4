//! Distance matrices, tours, and the TSP solver contract.

use crate::error::SolveError;
use crate::matrix::SquareMatrix;
use crate::search::SearchStats;

/// Symmetric city-to-city distances with a zero diagonal.
///
/// An off-diagonal zero means the two cities are not connected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")
)]
pub struct DistanceMatrix {
    inner: SquareMatrix,
    min_edges: Vec<Option<u64>>,
}

impl DistanceMatrix {
    /// Smallest number of cities accepted.
    pub const MIN_CITIES: usize = 3;

    /// Validates and wraps nested rows.
    ///
    /// # Errors
    ///
    /// [`SolveError::NotSquare`], [`SolveError::TooSmall`] (fewer than
    /// three cities), [`SolveError::NonZeroDiagonal`],
    /// [`SolveError::Asymmetric`], or [`SolveError::Overflow`].
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self, SolveError> {
        let inner = SquareMatrix::from_rows(rows)?;
        let n = inner.len();
        if n < Self::MIN_CITIES {
            return Err(SolveError::TooSmall {
                min: Self::MIN_CITIES,
                actual: n,
            });
        }
        for i in 0..n {
            let value = inner.get(i, i);
            if value != 0 {
                return Err(SolveError::NonZeroDiagonal { index: i, value });
            }
            for j in (i + 1)..n {
                if inner.get(i, j) != inner.get(j, i) {
                    return Err(SolveError::Asymmetric { row: i, col: j });
                }
            }
        }

        let min_edges = (0..n)
            .map(|i| inner.row(i).iter().copied().filter(|&d| d > 0).min())
            .collect();

        Ok(Self { inner, min_edges })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Always `false`: a valid matrix has at least three cities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Raw entry, `0` for a missing edge or the diagonal.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> u64 {
        self.inner.get(from, to)
    }

    /// Length of the edge between two distinct cities, if it exists.
    #[inline]
    pub fn edge(&self, from: usize, to: usize) -> Option<u64> {
        Some(self.inner.get(from, to)).filter(|&d| d > 0)
    }

    /// Cheapest edge incident to `city`, or `None` if it is isolated.
    #[inline]
    pub fn min_edge(&self, city: usize) -> Option<u64> {
        self.min_edges[city]
    }

    /// Copies the distances back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.inner.to_rows()
    }
}

impl TryFrom<Vec<Vec<u64>>> for DistanceMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<u64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.to_rows()
    }
}

/// A closed Hamiltonian cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Total length including the closing edge.
    pub cost: u64,

    /// 1-based city indices starting and ending at city 1.
    pub path: Vec<usize>,
}

impl Tour {
    /// Builds a tour from a zero-based open path that starts at city 0.
    pub(crate) fn from_open_path(cost: u64, open: &[usize]) -> Self {
        let mut path: Vec<usize> = open.iter().map(|&c| c + 1).collect();
        if let Some(&start) = path.first() {
            path.push(start);
        }
        Self { cost, path }
    }
}

/// Outcome of a TSP solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspResult {
    /// Cheapest tour found, `None` when no Hamiltonian cycle exists.
    pub tour: Option<Tour>,

    /// Search counters.
    pub stats: SearchStats,
}

impl TspResult {
    /// Tour length, `None` for "no tour".
    pub fn min_cost(&self) -> Option<u64> {
        self.tour.as_ref().map(|t| t.cost)
    }

    /// 1-based closed path; empty when there is no tour.
    pub fn best_path(&self) -> &[usize] {
        self.tour
            .as_ref()
            .map(|t| t.path.as_slice())
            .unwrap_or_default()
    }
}

/// A travelling-salesperson solver.
pub trait TspSolver {
    /// Short display name.
    fn name(&self) -> &'static str;

    /// Finds a minimum-length Hamiltonian cycle starting at city 1.
    fn solve(&self, matrix: &DistanceMatrix) -> TspResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(
            DistanceMatrix::new(vec![vec![0, 1], vec![1, 0]]).unwrap_err(),
            SolveError::TooSmall { min: 3, actual: 2 }
        );
        assert_eq!(
            DistanceMatrix::new(vec![vec![0, 1, 2], vec![1, 5, 3], vec![2, 3, 0]]).unwrap_err(),
            SolveError::NonZeroDiagonal { index: 1, value: 5 }
        );
        assert_eq!(
            DistanceMatrix::new(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 4, 0]]).unwrap_err(),
            SolveError::Asymmetric { row: 1, col: 2 }
        );
        assert!(matches!(
            DistanceMatrix::new(vec![vec![0, 1, 2], vec![1, 0, 3]]),
            Err(SolveError::NotSquare { .. })
        ));
    }

    #[test]
    fn test_edges_and_min_edges() {
        let m = DistanceMatrix::new(vec![
            vec![0, 4, 0, 9],
            vec![4, 0, 2, 0],
            vec![0, 2, 0, 7],
            vec![9, 0, 7, 0],
        ])
        .unwrap();
        assert_eq!(m.edge(0, 1), Some(4));
        assert_eq!(m.edge(0, 2), None);
        assert_eq!(m.edge(0, 0), None);
        assert_eq!(m.min_edge(0), Some(4));
        assert_eq!(m.min_edge(1), Some(2));
        assert_eq!(m.min_edge(3), Some(7));
    }

    #[test]
    fn test_isolated_city_has_no_min_edge() {
        let m = DistanceMatrix::new(vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(m.min_edge(2), None);
    }

    #[test]
    fn test_tour_path_is_closed_and_one_based() {
        let tour = Tour::from_open_path(70, &[0, 2, 1, 3]);
        assert_eq!(tour.path, vec![1, 3, 2, 4, 1]);
        let result = TspResult {
            tour: Some(tour),
            stats: SearchStats::default(),
        };
        assert_eq!(result.min_cost(), Some(70));
        assert_eq!(result.best_path(), &[1, 3, 2, 4, 1]);

        let none = TspResult {
            tour: None,
            stats: SearchStats::default(),
        };
        assert_eq!(none.min_cost(), None);
        assert!(none.best_path().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_matrix_serde_validates() {
        let m: DistanceMatrix = serde_json::from_str("[[0,2,3],[2,0,4],[3,4,0]]").unwrap();
        assert_eq!(m.edge(1, 2), Some(4));
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0,2,3],[2,0,4],[3,4,0]]");

        let err = serde_json::from_str::<DistanceMatrix>("[[0,2,3],[2,0,4],[3,5,0]]").unwrap_err();
        assert!(err.to_string().contains("differs"));
    }
}
