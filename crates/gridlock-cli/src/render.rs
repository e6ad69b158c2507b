//! Bordered text rendering of a grid.

use gridlock_core::{DigitGrid, Position};

const SEPARATOR: &str = "+-------+-------+-------+";

/// Renders the grid as a bordered block, grouping rows and columns in
/// threes:
///
/// ```text
/// +-------+-------+-------+
/// | 5 3 4 | 6 7 8 | 9 1 2 |
/// | 6 7 2 | 1 9 5 | 3 4 8 |
/// | 1 9 8 | 3 4 2 | 5 6 7 |
/// +-------+-------+-------+
/// ...
/// ```
///
/// Empty cells render as `.`.
#[must_use]
pub fn bordered(grid: &DigitGrid) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y % 3 == 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        for x in 0..9 {
            if x % 3 == 0 {
                out.push_str("| ");
            }
            match grid.get(Position::new(x, y)) {
                Some(digit) => out.push(char::from(b'0' + digit.value())),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str(SEPARATOR);
    out
}
