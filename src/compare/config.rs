//! Comparison harness configuration.

use crate::error::SolveError;
use crate::search::BranchAndBoundConfig;

/// Admission limits and solver options for a comparison run.
///
/// Exhaustive solvers are exponential; the limits keep interactive runs
/// bounded. The solvers themselves accept any size.
///
/// # Examples
///
/// ```
/// use u_exactopt::compare::ComparisonConfig;
///
/// let config = ComparisonConfig::default()
///     .with_max_tsp_cities(12)
///     .with_max_items(Some(30));
/// assert_eq!(config.max_tsp_cities, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonConfig {
    /// Largest distance matrix accepted.
    pub max_tsp_cities: usize,

    /// Largest cost matrix accepted.
    pub max_agents: usize,

    /// Largest item set accepted (None = unlimited). The knapsack
    /// comparison always runs exhaustive backtracking.
    pub max_items: Option<usize>,

    /// Options passed to the branch-and-bound solvers.
    pub branch_and_bound: BranchAndBoundConfig,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            max_tsp_cities: 10,
            max_agents: 8,
            max_items: Some(25),
            branch_and_bound: BranchAndBoundConfig::default(),
        }
    }
}

impl ComparisonConfig {
    pub fn with_max_tsp_cities(mut self, n: usize) -> Self {
        self.max_tsp_cities = n;
        self
    }

    pub fn with_max_agents(mut self, n: usize) -> Self {
        self.max_agents = n;
        self
    }

    pub fn with_max_items(mut self, n: Option<usize>) -> Self {
        self.max_items = n;
        self
    }

    /// Runs the branch-and-bound solvers on rayon workers.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.branch_and_bound.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.max_tsp_cities < 3 {
            return Err(SolveError::InvalidConfig(format!(
                "max_tsp_cities must be at least 3, got {}",
                self.max_tsp_cities
            )));
        }
        if self.max_agents < 2 {
            return Err(SolveError::InvalidConfig(format!(
                "max_agents must be at least 2, got {}",
                self.max_agents
            )));
        }
        if self.max_items == Some(0) {
            return Err(SolveError::InvalidConfig(
                "max_items must be positive when set".into(),
            ));
        }
        Ok(())
    }

    /// Refuses inputs above `limit`.
    pub(crate) fn admit(what: &'static str, actual: usize, limit: usize) -> Result<(), SolveError> {
        if actual > limit {
            log::warn!("refusing {what} of size {actual} (limit {limit})");
            return Err(SolveError::TooLarge {
                what,
                actual,
                limit,
            });
        }
        Ok(())
    }
}
