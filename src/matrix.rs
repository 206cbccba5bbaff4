//! Dense square matrix storage shared by the TSP and assignment inputs.

use crate::error::SolveError;

/// Row-major `n x n` matrix of non-negative integer weights.
///
/// Construction guarantees squareness and that the sum of all entries
/// stays below `u64::MAX`, so any path or assignment cost built from its
/// entries can be accumulated without overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<u64>,
}

impl SquareMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`SolveError::NotSquare`] if any row length differs from the row
    /// count, [`SolveError::Overflow`] if the entries cannot be summed.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, SolveError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        let mut total: u64 = 0;

        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(SolveError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            for &value in &entries {
                total = total
                    .checked_add(value)
                    .filter(|&t| t < u64::MAX)
                    .ok_or(SolveError::Overflow("matrix entries"))?;
            }
            data.extend(entries);
        }

        Ok(Self { n, data })
    }

    /// Dimension of the matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        assert!(col < self.n, "column {col} out of bounds for size {}", self.n);
        self.data[row * self.n + col]
    }

    /// Borrows one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[u64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.data.chunks(self.n.max(1)).map(<[u64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_row_major() {
        let m = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SquareMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0], vec![2, 1, 0]])
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_wide_matrix_rejected() {
        let err = SquareMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert!(matches!(err, SolveError::NotSquare { row: 0, .. }));
    }

    #[test]
    fn test_overflowing_entries_rejected() {
        let err = SquareMatrix::from_rows(vec![vec![u64::MAX / 2, u64::MAX / 2], vec![2, 0]])
            .unwrap_err();
        assert_eq!(err, SolveError::Overflow("matrix entries"));
    }

    #[test]
    fn test_empty_matrix() {
        let m = SquareMatrix::from_rows(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert!(m.to_rows().is_empty());
    }
}
