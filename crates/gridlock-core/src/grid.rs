//! The 9x9 value grid.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// Error returned when grid text cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input contained a character that is neither a digit, an empty-cell
    /// marker (`.`, `_`, `0`), nor whitespace.
    #[display("invalid character {ch:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        #[error(not(source))]
        ch: char,
    },
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found in the input.
        #[error(not(source))]
        found: usize,
    },
}

/// A 9x9 grid of optional digits.
///
/// `None` means the cell is unknown. The solver mutates a grid of this type
/// in place; a solved grid has every cell filled and each digit exactly once
/// per row, column, and box.
///
/// # Text format
///
/// [`FromStr`] accepts 81 cells given as digits `1`-`9` for filled cells and
/// `.`, `_`, or `0` for empty cells; all whitespace is ignored.
/// [`Display`](fmt::Display) produces nine lines of nine cells, grouped in
/// threes:
///
/// ```text
/// 53_ _7_ ___
/// 6__ 195 ___
/// ...
/// ```
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// # Ok::<(), gridlock_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [[Option<Digit>; 9]; 9],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Creates a grid from raw cell values, one row per inner array.
    ///
    /// Values outside 1-9 (including 0) are treated as unknown cells. This
    /// is deliberately lenient so callers can pass integer matrices that use
    /// 0 or any other sentinel for blanks.
    #[must_use]
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Position::all() {
            let raw = values[pos.y() as usize][pos.x() as usize];
            grid.set(pos, Digit::try_from_value(raw));
        }
        grid
    }

    /// Returns the raw cell values, with 0 for unknown cells.
    #[must_use]
    pub fn to_values(self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::all() {
            values[pos.y() as usize][pos.x() as usize] =
                self.get(pos).map_or(0, Digit::value);
        }
        values
    }

    /// Returns the digit at a position, or `None` if the cell is unknown.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.y() as usize][pos.x() as usize]
    }

    /// Sets or clears the digit at a position.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.y() as usize][pos.x() as usize] = value;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::all().all(|pos| self.get(pos).is_some())
    }

    /// Returns the number of unknown cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Position::all().filter(|&pos| self.get(pos).is_none()).count()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::try_from_value(ch as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            };
            if count < 81 {
                #[expect(clippy::cast_possible_truncation)]
                let pos = Position::new((count % 9) as u8, (count / 9) as u8);
                grid.set(pos, value);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { found: count });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const CLASSIC: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_parse_classic_puzzle() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(1, 0)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(4, 0)), Some(Digit::D7));
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.empty_count(), 51);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let dots = ".".repeat(81).parse::<DigitGrid>().unwrap();
        let zeros = "0".repeat(81).parse::<DigitGrid>().unwrap();
        let underscores = "_".repeat(81).parse::<DigitGrid>().unwrap();
        assert_eq!(dots, DigitGrid::new());
        assert_eq!(zeros, DigitGrid::new());
        assert_eq!(underscores, DigitGrid::new());
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let result = "x".repeat(81).parse::<DigitGrid>();
        assert_eq!(
            result,
            Err(ParseGridError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        let result = ".".repeat(80).parse::<DigitGrid>();
        assert_eq!(result, Err(ParseGridError::WrongCellCount { found: 80 }));

        let result = ".".repeat(82).parse::<DigitGrid>();
        assert!(matches!(result, Err(ParseGridError::WrongCellCount { .. })));
    }

    #[test]
    fn test_display_matches_text_format() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        let text = grid.to_string();
        assert!(text.starts_with("53_ _7_ ___\n6__ 195 ___"));
        let reparsed: DigitGrid = text.parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_from_values_is_lenient() {
        let mut values = [[0; 9]; 9];
        values[0][0] = 5;
        values[0][1] = 13;
        values[4][4] = 9;
        values[8][8] = 200;

        let grid = DigitGrid::from_values(values);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(1, 0)), None);
        assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D9));
        assert_eq!(grid.get(Position::new(8, 8)), None);
    }

    #[test]
    fn test_to_values_round_trip() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        let values = grid.to_values();
        assert_eq!(values[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(DigitGrid::from_values(values), grid);
    }

    proptest! {
        #[test]
        fn prop_from_values_keeps_exactly_in_range_cells(
            values in proptest::array::uniform9(proptest::array::uniform9(0u8..=20)),
        ) {
            let grid = DigitGrid::from_values(values);
            for pos in Position::all() {
                let raw = values[pos.y() as usize][pos.x() as usize];
                prop_assert_eq!(grid.get(pos), Digit::try_from_value(raw));
            }
        }
    }
}
