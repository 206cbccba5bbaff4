//! Timed side-by-side execution of every solver for one instance.
//!
//! Each solver is invoked once and wall-clock timed. The returned
//! comparison records which exact method was fastest, whether the greedy
//! heuristic reached the optimum, and whether bounding beat plain
//! backtracking. `Display` renders the plain-text summary.

use std::fmt;
use std::time::Duration;

use log::{info, warn};
use web_time::Instant;

use super::config::ComparisonConfig;
use crate::assignment::{
    AssignmentBacktracking, AssignmentBranchAndBound, AssignmentResult, AssignmentSolver,
    CostMatrix,
};
use crate::error::SolveError;
use crate::knapsack::{
    ItemSet, KnapsackBacktracking, KnapsackBranchAndBound, KnapsackDp, KnapsackGreedy,
    KnapsackResult, KnapsackSolver,
};
use crate::tsp::{DistanceMatrix, TspBacktracking, TspBranchAndBound, TspResult, TspSolver};

/// A solver result together with the solver's name and run time.
#[derive(Debug, Clone)]
pub struct Timed<R> {
    /// Solver display name.
    pub name: &'static str,

    /// What the solver returned.
    pub result: R,

    /// Wall-clock time of the call.
    pub elapsed: Duration,
}

impl<R> Timed<R> {
    fn measure(name: &'static str, f: impl FnOnce() -> R) -> Self {
        let start = Instant::now();
        let result = f();
        Self {
            name,
            result,
            elapsed: start.elapsed(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl<R, E> Timed<Result<R, E>> {
    fn transpose(self) -> Result<Timed<R>, E> {
        Ok(Timed {
            name: self.name,
            result: self.result?,
            elapsed: self.elapsed,
        })
    }
}

/// Results that report a minimum cost or the "no solution" sentinel.
pub trait MinCost {
    /// Minimum cost, `None` when no solution exists.
    fn min_cost(&self) -> Option<u64>;
}

impl MinCost for TspResult {
    fn min_cost(&self) -> Option<u64> {
        TspResult::min_cost(self)
    }
}

impl MinCost for AssignmentResult {
    fn min_cost(&self) -> Option<u64> {
        AssignmentResult::min_cost(self)
    }
}

/// All four knapsack solvers run on the same instance.
#[derive(Debug, Clone)]
pub struct KnapsackComparison {
    /// Dynamic programming; its value is the reference optimum.
    pub dp: Timed<KnapsackResult>,

    /// Exhaustive include/exclude search.
    pub backtracking: Timed<KnapsackResult>,

    /// Search pruned by the fractional relaxation bound.
    pub branch_and_bound: Timed<KnapsackResult>,

    /// Ratio-greedy heuristic.
    pub greedy: Timed<KnapsackResult>,
}

impl KnapsackComparison {
    /// Optimal value, as found by dynamic programming.
    pub fn optimal_value(&self) -> u64 {
        self.dp.result.max_value
    }

    /// Whether DP, backtracking and branch-and-bound report the same value.
    pub fn exact_agree(&self) -> bool {
        let v = self.optimal_value();
        self.backtracking.result.max_value == v && self.branch_and_bound.result.max_value == v
    }

    /// Whether the greedy heuristic reached the optimum.
    pub fn greedy_optimal(&self) -> bool {
        self.greedy.result.max_value == self.optimal_value()
    }

    /// Fastest exact solver among those that reached the optimum.
    pub fn fastest_exact(&self) -> &Timed<KnapsackResult> {
        let v = self.optimal_value();
        [&self.dp, &self.backtracking, &self.branch_and_bound]
            .into_iter()
            .filter(|t| t.result.max_value == v)
            .min_by_key(|t| t.elapsed)
            .unwrap_or(&self.dp)
    }

    /// Whether branch-and-bound finished before backtracking.
    pub fn bounding_faster(&self) -> bool {
        self.branch_and_bound.elapsed < self.backtracking.elapsed
    }
}

impl fmt::Display for KnapsackComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fastest = self.fastest_exact();
        writeln!(f, "For Knapsack (Max Value: {}):", self.optimal_value())?;
        writeln!(
            f,
            "  - Fastest Exact Solution: {} ({:.3}ms).",
            fastest.name,
            fastest.millis()
        )?;
        if self.greedy_optimal() {
            writeln!(
                f,
                "  - Approximation Speed: the Greedy heuristic found the optimal value in {:.3}ms.",
                self.greedy.millis()
            )?;
        } else {
            writeln!(
                f,
                "  - Approximation Speed: the Greedy heuristic took {:.3}ms but reached only {}.",
                self.greedy.millis(),
                self.greedy.result.max_value
            )?;
        }
        write_search_line(f, &self.backtracking, &self.branch_and_bound)
    }
}

/// Backtracking and branch-and-bound run on the same minimization instance.
#[derive(Debug, Clone)]
pub struct MinimizationComparison<R> {
    /// Problem label used in the summary.
    pub problem: &'static str,

    /// Exhaustive search; its cost is the reference optimum.
    pub backtracking: Timed<R>,

    /// Search pruned by the problem's lower bound.
    pub branch_and_bound: Timed<R>,
}

/// TSP comparison.
pub type TspComparison = MinimizationComparison<TspResult>;

/// Assignment comparison.
pub type AssignmentComparison = MinimizationComparison<AssignmentResult>;

impl<R: MinCost> MinimizationComparison<R> {
    /// Optimal cost, `None` when no solution exists.
    pub fn optimal_cost(&self) -> Option<u64> {
        self.backtracking.result.min_cost()
    }

    /// Whether both solvers report the same cost (or both report none).
    pub fn agree(&self) -> bool {
        self.backtracking.result.min_cost() == self.branch_and_bound.result.min_cost()
    }

    /// The faster of the two solvers.
    pub fn fastest(&self) -> &Timed<R> {
        if self.bounding_faster() {
            &self.branch_and_bound
        } else {
            &self.backtracking
        }
    }

    /// Whether branch-and-bound finished before backtracking.
    pub fn bounding_faster(&self) -> bool {
        self.branch_and_bound.elapsed < self.backtracking.elapsed
    }
}

impl<R: MinCost> fmt::Display for MinimizationComparison<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(cost) = self.optimal_cost() else {
            return writeln!(
                f,
                "For {}, no valid solution could be found with the given matrix.",
                self.problem
            );
        };
        let fastest = self.fastest();
        writeln!(f, "For {} (Min Cost: {cost}):", self.problem)?;
        writeln!(
            f,
            "  - Fastest Exact Method: {} ({:.3}ms).",
            fastest.name,
            fastest.millis()
        )?;
        write_search_line(f, &self.backtracking, &self.branch_and_bound)
    }
}

fn write_search_line<R>(
    f: &mut fmt::Formatter<'_>,
    backtracking: &Timed<R>,
    bounded: &Timed<R>,
) -> fmt::Result {
    if bounded.elapsed < backtracking.elapsed {
        writeln!(
            f,
            "  - Search Comparison: Branch & Bound ({:.3}ms) was faster than Backtracking ({:.3}ms).",
            bounded.millis(),
            backtracking.millis()
        )
    } else {
        writeln!(
            f,
            "  - Search Comparison: Backtracking ({:.3}ms) was faster than Branch & Bound ({:.3}ms); bounding overhead dominated on this instance.",
            backtracking.millis(),
            bounded.millis()
        )
    }
}

/// Runs every solver of a problem family on one instance.
pub struct ComparisonRunner;

impl ComparisonRunner {
    /// Runs DP, backtracking, branch-and-bound and greedy, in that order.
    ///
    /// # Errors
    ///
    /// Invalid configuration, an item set above `max_items`, or a DP table
    /// that cannot be allocated.
    pub fn knapsack(
        capacity: u64,
        items: &ItemSet,
        config: &ComparisonConfig,
    ) -> Result<KnapsackComparison, SolveError> {
        config.validate()?;
        if let Some(limit) = config.max_items {
            ComparisonConfig::admit("item set", items.len(), limit)?;
        }
        info!("knapsack: capacity={capacity} items={}", items.len());

        let comparison = KnapsackComparison {
            dp: run_knapsack(&KnapsackDp, capacity, items)?,
            backtracking: run_knapsack(&KnapsackBacktracking, capacity, items)?,
            branch_and_bound: run_knapsack(&KnapsackBranchAndBound, capacity, items)?,
            greedy: run_knapsack(&KnapsackGreedy, capacity, items)?,
        };

        if !comparison.exact_agree() {
            warn!(
                "knapsack exact solvers disagree: dp={} bt={} bnb={}",
                comparison.dp.result.max_value,
                comparison.backtracking.result.max_value,
                comparison.branch_and_bound.result.max_value
            );
        }
        Ok(comparison)
    }

    /// Runs TSP backtracking then branch-and-bound.
    ///
    /// # Errors
    ///
    /// Invalid configuration or more cities than `max_tsp_cities`.
    pub fn tsp(
        matrix: &DistanceMatrix,
        config: &ComparisonConfig,
    ) -> Result<TspComparison, SolveError> {
        config.validate()?;
        ComparisonConfig::admit("distance matrix", matrix.len(), config.max_tsp_cities)?;
        info!("tsp: cities={}", matrix.len());

        let bnb = TspBranchAndBound::new().with_config(config.branch_and_bound.clone());
        let comparison = MinimizationComparison {
            problem: "TSP",
            backtracking: Timed::measure(TspBacktracking.name(), || TspBacktracking.solve(matrix)),
            branch_and_bound: Timed::measure(bnb.name(), || bnb.solve(matrix)),
        };
        log_disagreement(&comparison);
        Ok(comparison)
    }

    /// Runs assignment backtracking then branch-and-bound.
    ///
    /// # Errors
    ///
    /// Invalid configuration or more agents than `max_agents`.
    pub fn assignment(
        matrix: &CostMatrix,
        config: &ComparisonConfig,
    ) -> Result<AssignmentComparison, SolveError> {
        config.validate()?;
        ComparisonConfig::admit("cost matrix", matrix.len(), config.max_agents)?;
        info!("assignment: agents={}", matrix.len());

        let bnb = AssignmentBranchAndBound::new().with_config(config.branch_and_bound.clone());
        let comparison = MinimizationComparison {
            problem: "Assignment",
            backtracking: Timed::measure(AssignmentBacktracking.name(), || {
                AssignmentBacktracking.solve(matrix)
            }),
            branch_and_bound: Timed::measure(bnb.name(), || bnb.solve(matrix)),
        };
        log_disagreement(&comparison);
        Ok(comparison)
    }
}

fn run_knapsack<S: KnapsackSolver>(
    solver: &S,
    capacity: u64,
    items: &ItemSet,
) -> Result<Timed<KnapsackResult>, SolveError> {
    Timed::measure(solver.name(), || solver.solve(capacity, items)).transpose()
}

fn log_disagreement<R: MinCost>(comparison: &MinimizationComparison<R>) {
    if !comparison.agree() {
        warn!(
            "{} solvers disagree: bt={:?} bnb={:?}",
            comparison.problem,
            comparison.backtracking.result.min_cost(),
            comparison.branch_and_bound.result.min_cost()
        );
    }
}
