//! Fixed-point logical prefilter.
//!
//! Repeatedly scans every house for digits that fit exactly one empty cell
//! and commits them, until a full pass commits nothing. Each pass scans
//! boxes first, then columns, then rows; a commit updates the usage tables
//! immediately, so later scans in the same pass already see it.
//!
//! This is an advisory prefilter, not a complete singles solver. Because
//! each house kind is scanned independently per digit, a commit made earlier
//! in a pass can occasionally invalidate a scan result before it is acted
//! on; the commit step re-checks the cell and skips when that happens. The
//! backtracking search alone guarantees correctness, with or without this
//! pass. Disabling deduction changes how much searching is needed, never the
//! answer.

use gridlock_core::{Digit, House};
use log::trace;

use crate::TagBoard;

/// Iteration cap for the pass loop. Each productive pass fills at least one
/// of the 81 cells, so the cap can only be hit if progress accounting broke.
const MAX_PASSES: usize = 81;

/// Runs deduction passes to fixed point and returns the number of digits
/// committed.
pub fn deduce(board: &mut TagBoard) -> usize {
    let mut total = 0;
    for pass in 0..MAX_PASSES {
        let placed = deduce_pass(board);
        if placed == 0 {
            break;
        }
        trace!("deduction pass {pass}: {placed} cells");
        total += placed;
    }
    total
}

/// Runs one full pass over boxes, then columns, then rows.
fn deduce_pass(board: &mut TagBoard) -> usize {
    let mut placed = 0;
    for house in House::BOXES {
        placed += deduce_house(board, house);
    }
    for house in House::COLUMNS {
        placed += deduce_house(board, house);
    }
    for house in House::ROWS {
        placed += deduce_house(board, house);
    }
    placed
}

/// Commits every digit that fits exactly one empty cell of `house`.
fn deduce_house(board: &mut TagBoard, house: House) -> usize {
    let mut placed = 0;
    for digit in Digit::ALL {
        let mut sole_fit = None;
        let mut fits = 0;
        for pos in house.positions() {
            if board.get(pos).is_some() {
                continue;
            }
            if board.allows(pos, digit) {
                sole_fit = Some(pos);
                fits += 1;
                if fits > 1 {
                    break;
                }
            }
        }
        if fits == 1 {
            if let Some(pos) = sole_fit {
                // An earlier commit in this pass may have filled the cell or
                // used up the digit since the scan; skip if so.
                if board.get(pos).is_none() && board.allows(pos, digit) {
                    board.assign(pos, digit);
                    placed += 1;
                }
            }
        }
    }
    placed
}
