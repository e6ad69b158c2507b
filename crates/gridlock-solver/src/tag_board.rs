//! Constraint-tracking board state.

use derive_more::{Display, Error};
use gridlock_core::{Digit, DigitGrid, Position};

/// Error returned when the givens of a puzzle conflict with each other.
///
/// Carries the first position at which a given repeated a digit already used
/// in its row, column, or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("given {digit} at {position} repeats a digit in its row, column, or box")]
pub struct GivensConflict {
    /// Position of the conflicting given.
    #[error(not(source))]
    pub position: Position,
    /// The repeated digit.
    #[error(not(source))]
    pub digit: Digit,
}

/// The value grid plus three digit-usage tables, one per constraint group.
///
/// For every filled cell the corresponding row, column, and box entries are
/// set, which makes [`allows`](TagBoard::allows) an O(1) triple lookup. The
/// tables are private: all mutation goes through [`assign`](TagBoard::assign)
/// and [`retract`](TagBoard::retract), which update the grid and all three
/// tables together. Every `assign` on a failing search path must be undone
/// by exactly one matching `retract` before control returns further up,
/// otherwise usage state leaks into sibling branches.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position};
/// use gridlock_solver::TagBoard;
///
/// let mut board = TagBoard::from_grid(&DigitGrid::new())?;
/// let pos = Position::new(0, 0);
///
/// assert!(board.allows(pos, Digit::D5));
/// board.assign(pos, Digit::D5);
///
/// // The digit is now used up in the row, the column, and the box.
/// assert!(!board.allows(Position::new(8, 0), Digit::D5));
/// assert!(!board.allows(Position::new(0, 8), Digit::D5));
/// assert!(!board.allows(Position::new(1, 1), Digit::D5));
/// # Ok::<(), gridlock_solver::GivensConflict>(())
/// ```
#[derive(Debug, Clone)]
pub struct TagBoard {
    grid: DigitGrid,
    /// `row_used[y][d]`: digit with index `d` appears in row `y`.
    row_used: [[bool; 9]; 9],
    /// `col_used[d][x]`: digit with index `d` appears in column `x`.
    col_used: [[bool; 9]; 9],
    /// `box_used[b][d]`: digit with index `d` appears in box `b`.
    box_used: [[bool; 9]; 9],
}

impl TagBoard {
    /// Builds a board from a grid, populating the usage tables from the
    /// filled cells.
    ///
    /// # Errors
    ///
    /// Returns [`GivensConflict`] if two filled cells share a digit within
    /// one row, column, or box. Such a grid cannot be completed without
    /// changing a given, so callers typically report it as unsolvable.
    pub fn from_grid(grid: &DigitGrid) -> Result<Self, GivensConflict> {
        let mut board = Self {
            grid: DigitGrid::new(),
            row_used: [[false; 9]; 9],
            col_used: [[false; 9]; 9],
            box_used: [[false; 9]; 9],
        };
        for position in Position::all() {
            if let Some(digit) = grid.get(position) {
                if !board.allows(position, digit) {
                    return Err(GivensConflict { position, digit });
                }
                board.assign(position, digit);
            }
        }
        Ok(board)
    }

    /// Returns `true` if `digit` is currently legal at `pos`, that is, not
    /// yet used in the cell's row, column, or box.
    ///
    /// Pure query; the cell's own fill state is not consulted.
    #[must_use]
    #[inline]
    pub fn allows(&self, pos: Position, digit: Digit) -> bool {
        let d = digit.index();
        !self.row_used[pos.y() as usize][d]
            && !self.col_used[d][pos.x() as usize]
            && !self.box_used[pos.box_index() as usize][d]
    }

    /// Fills `pos` with `digit` and marks the digit used in the cell's row,
    /// column, and box.
    ///
    /// The cell must be empty and the digit legal there; callers check with
    /// [`allows`](TagBoard::allows) first.
    #[inline]
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.grid.get(pos).is_none());
        debug_assert!(self.allows(pos, digit));
        self.grid.set(pos, Some(digit));
        let d = digit.index();
        self.row_used[pos.y() as usize][d] = true;
        self.col_used[d][pos.x() as usize] = true;
        self.box_used[pos.box_index() as usize][d] = true;
    }

    /// Empties `pos` and clears the usage marks set by the matching
    /// [`assign`](TagBoard::assign).
    ///
    /// Must only undo a prior `assign` with the same position and digit.
    #[inline]
    pub fn retract(&mut self, pos: Position, digit: Digit) {
        debug_assert_eq!(self.grid.get(pos), Some(digit));
        self.grid.set(pos, None);
        let d = digit.index();
        self.row_used[pos.y() as usize][d] = false;
        self.col_used[d][pos.x() as usize] = false;
        self.box_used[pos.box_index() as usize][d] = false;
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.grid.get(pos)
    }

    /// Consumes the board and returns the value grid.
    #[must_use]
    pub fn into_grid(self) -> DigitGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(u8, u8, Digit)]) -> Result<TagBoard, GivensConflict> {
        let mut grid = DigitGrid::new();
        for &(x, y, digit) in cells {
            grid.set(Position::new(x, y), Some(digit));
        }
        TagBoard::from_grid(&grid)
    }

    #[test]
    fn test_from_grid_populates_tags() {
        let board = board_with(&[(4, 4, Digit::D5)]).unwrap();

        // Same row, column, and box all reject D5.
        assert!(!board.allows(Position::new(0, 4), Digit::D5));
        assert!(!board.allows(Position::new(4, 0), Digit::D5));
        assert!(!board.allows(Position::new(3, 3), Digit::D5));

        // Unrelated cell and unrelated digit are unaffected.
        assert!(board.allows(Position::new(0, 0), Digit::D5));
        assert!(board.allows(Position::new(0, 4), Digit::D6));
    }

    #[test]
    fn test_from_grid_rejects_row_conflict() {
        let err = board_with(&[(0, 0, Digit::D5), (8, 0, Digit::D5)]).unwrap_err();
        assert_eq!(err.position, Position::new(8, 0));
        assert_eq!(err.digit, Digit::D5);
    }

    #[test]
    fn test_from_grid_rejects_column_conflict() {
        let err = board_with(&[(3, 0, Digit::D2), (3, 8, Digit::D2)]).unwrap_err();
        assert_eq!(err.position, Position::new(3, 8));
    }

    #[test]
    fn test_from_grid_rejects_box_conflict() {
        // (0, 0) and (2, 2) share box 0 but neither a row nor a column.
        let err = board_with(&[(0, 0, Digit::D7), (2, 2, Digit::D7)]).unwrap_err();
        assert_eq!(err.position, Position::new(2, 2));
    }

    #[test]
    fn test_assign_retract_is_symmetric() {
        let mut board = board_with(&[]).unwrap();
        let pos = Position::new(2, 7);

        board.assign(pos, Digit::D3);
        assert_eq!(board.get(pos), Some(Digit::D3));
        assert!(!board.allows(Position::new(2, 0), Digit::D3));

        board.retract(pos, Digit::D3);
        assert_eq!(board.get(pos), None);
        assert!(board.allows(Position::new(2, 0), Digit::D3));
        assert!(board.allows(pos, Digit::D3));
    }

    #[test]
    fn test_distinct_digits_in_one_house_coexist() {
        let board = board_with(&[(0, 0, Digit::D1), (1, 0, Digit::D2)]).unwrap();
        assert!(!board.allows(Position::new(2, 0), Digit::D1));
        assert!(!board.allows(Position::new(2, 0), Digit::D2));
        assert!(board.allows(Position::new(2, 0), Digit::D3));
    }

    #[test]
    fn test_into_grid_returns_values() {
        let board = board_with(&[(5, 1, Digit::D9)]).unwrap();
        let grid = board.into_grid();
        assert_eq!(grid.get(Position::new(5, 1)), Some(Digit::D9));
        assert_eq!(grid.empty_count(), 80);
    }
}
