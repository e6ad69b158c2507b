//! Core data types for the gridlock Sudoku engine.
//!
//! This crate provides the board-level vocabulary shared by the solver and
//! any front end:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: an (x, y) cell coordinate on the 9x9 board
//! - [`House`]: a row, column, or 3x3 box, the three constraint groups
//! - [`DigitGrid`]: the 9x9 value grid with text parsing and formatting
//!
//! The grid treats any value outside 1-9 as an empty cell, so callers can
//! hand over raw integer matrices without pre-cleaning them.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! assert!(!grid.is_complete());
//! ```

pub use self::{
    digit::Digit,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
};

mod digit;
mod grid;
mod house;
mod position;
