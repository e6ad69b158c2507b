use gridlock_core::DigitGrid;
use log::debug;

use crate::{SolveError, TagBoard, deduction, search};

/// Statistics about a successful solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Number of cells committed by the logical prefilter.
    pub deduced: usize,
    /// Number of tentative assignments made by the backtracking search.
    pub nodes: u64,
}

/// Sudoku solving engine.
///
/// A `Solver` holds only configuration; every call to
/// [`solve`](Solver::solve) owns its own board state, so one solver value
/// can be reused across puzzles. The engine first runs a logical prefilter
/// that commits forced cells, then completes the rest by exhaustive
/// backtracking. The search order is fixed, so the same input always
/// produces the same solution.
///
/// # Examples
///
/// ```
/// use gridlock_core::DigitGrid;
/// use gridlock_solver::Solver;
///
/// let mut grid = DigitGrid::new();
/// let report = Solver::new().solve(&mut grid)?;
///
/// assert!(grid.is_complete());
/// assert_eq!(report.deduced, 0); // nothing is forced on an empty board
/// # Ok::<(), gridlock_solver::SolveError>(())
/// ```
///
/// With a search budget:
///
/// ```
/// use gridlock_core::DigitGrid;
/// use gridlock_solver::{SolveError, Solver};
///
/// let mut grid = DigitGrid::new();
/// let result = Solver::new().with_node_budget(10).solve(&mut grid);
///
/// assert_eq!(result, Err(SolveError::BudgetExhausted));
/// assert_eq!(grid, DigitGrid::new()); // input untouched on failure
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    deduce: bool,
    node_budget: Option<u64>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with deduction enabled and no search budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deduce: true,
            node_budget: None,
        }
    }

    /// Limits the search to `nodes` tentative assignments.
    ///
    /// A solve that would exceed the budget fails with
    /// [`SolveError::BudgetExhausted`] instead of running to completion.
    #[must_use]
    pub const fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Disables the logical prefilter.
    ///
    /// The prefilter is purely an optimization; without it the search does
    /// more work but finds the same solution.
    #[must_use]
    pub const fn without_deduction(mut self) -> Self {
        self.deduce = false;
        self
    }

    /// Solves the puzzle in `grid`.
    ///
    /// On success the grid is overwritten in place with the completed
    /// solution; every given keeps its value. On failure the grid is left
    /// exactly as passed in: the engine works on an internal copy and only
    /// writes back a complete, valid solution.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Unsolvable`] if no completion exists, or if the
    ///   givens already repeat a digit within a row, column, or box.
    /// - [`SolveError::BudgetExhausted`] if a node budget was configured
    ///   and ran out before the search reached a verdict.
    pub fn solve(&self, grid: &mut DigitGrid) -> Result<SolveReport, SolveError> {
        let mut board = match TagBoard::from_grid(grid) {
            Ok(board) => board,
            Err(conflict) => {
                debug!("givens rejected: {conflict}");
                return Err(SolveError::Unsolvable);
            }
        };

        let deduced = if self.deduce {
            deduction::deduce(&mut board)
        } else {
            0
        };
        let nodes = search::search(&mut board, self.node_budget)?;
        debug!("solved: {deduced} cells deduced, {nodes} search nodes");

        *grid = board.into_grid();
        Ok(SolveReport { deduced, nodes })
    }
}
