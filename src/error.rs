//! Error type shared by every input constructor and solver.

use thiserror::Error;

/// Errors raised when inputs or configuration are malformed.
///
/// Infeasibility (no Hamiltonian cycle, no perfect assignment) is not an
/// error: solvers report it as a `None` result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// An item has a zero id, value, or weight.
    #[error("item {id} is invalid: {reason}")]
    InvalidItem {
        /// Id of the offending item.
        id: u64,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Two items share the same id.
    #[error("duplicate item id {0}")]
    DuplicateItemId(u64),

    /// A matrix row does not have as many columns as the matrix has rows.
    #[error("matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Actual length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// The matrix is smaller than the problem requires.
    #[error("matrix of size {actual} is too small, at least {min} required")]
    TooSmall {
        /// Minimum dimension.
        min: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// A distance matrix has a non-zero self-distance.
    #[error("diagonal entry ({index}, {index}) must be zero, got {value}")]
    NonZeroDiagonal {
        /// Zero-based city index.
        index: usize,
        /// Value found on the diagonal.
        value: u64,
    },

    /// A distance matrix is not symmetric.
    #[error("distance ({row}, {col}) differs from ({col}, {row})")]
    Asymmetric {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },

    /// A cost matrix contains a zero entry.
    #[error("cost ({row}, {col}) must be positive")]
    NonPositiveCost {
        /// Zero-based agent index.
        row: usize,
        /// Zero-based task index.
        col: usize,
    },

    /// Summing the input would overflow `u64`.
    #[error("sum of {0} overflows u64")]
    Overflow(&'static str),

    /// The dynamic-programming table does not fit in memory addressing.
    #[error("capacity {capacity} is too large for a {items}-item DP table")]
    CapacityTooLarge {
        /// Requested capacity.
        capacity: u64,
        /// Number of items.
        items: usize,
    },

    /// The instance exceeds the configured admission limit.
    #[error("{what} has size {actual}, limit is {limit}")]
    TooLarge {
        /// Which input was refused.
        what: &'static str,
        /// Actual size.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
