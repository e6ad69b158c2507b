//! Exhaustive backtracking search.
//!
//! Fills the remaining empty cells by depth-first search: cells are visited
//! in column-major order (rows 0-8 within a column, then the next column),
//! digits are tried in ascending order, and the usage tables prune illegal
//! placements. The first completion found under this fixed order is
//! returned, so the result is deterministic for a given board.
//!
//! The search keeps its state in an explicit stack of frames instead of
//! recursing. Each frame records which slot was filled with which digit;
//! popping a frame retracts the digit and resumes that slot at the next
//! digit. This keeps the assign/retract pairing in one place and lets a
//! budget abort unwind the whole stack before returning.

use gridlock_core::{Digit, Position};
use tinyvec::ArrayVec;

use crate::{SolveError, TagBoard};

/// One tentative placement: `slot` indexes the empty-cell list, `value` is
/// the digit placed there.
#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    slot: usize,
    value: u8,
}

/// Column-major cell codes (x * 9 + y) of the board's empty cells.
type Slots = ArrayVec<[u8; 81]>;

fn empty_slots(board: &TagBoard) -> Slots {
    let mut slots = Slots::new();
    for x in 0..9 {
        for y in 0..9 {
            if board.get(Position::new(x, y)).is_none() {
                slots.push(x * 9 + y);
            }
        }
    }
    slots
}

const fn slot_position(code: u8) -> Position {
    Position::new(code / 9, code % 9)
}

/// Searches for a completion of `board`, filling it in place.
///
/// On success the board is fully filled and the number of nodes visited is
/// returned; a node is one tentative digit assignment. On failure every
/// tentative assignment has been retracted, leaving the board exactly as it
/// was on entry.
///
/// # Errors
///
/// - [`SolveError::Unsolvable`] if every branch is exhausted.
/// - [`SolveError::BudgetExhausted`] if `node_budget` is `Some(n)` and the
///   search would visit more than `n` nodes.
pub fn search(board: &mut TagBoard, node_budget: Option<u64>) -> Result<u64, SolveError> {
    let slots = empty_slots(board);
    let mut frames: ArrayVec<[Frame; 81]> = ArrayVec::new();
    let mut nodes: u64 = 0;

    let mut slot = 0;
    let mut first_value = 1u8;
    while slot < slots.len() {
        let pos = slot_position(slots[slot]);
        let mut advanced = false;
        for value in first_value..=9 {
            let digit = Digit::from_value(value);
            if !board.allows(pos, digit) {
                continue;
            }
            if node_budget.is_some_and(|budget| nodes >= budget) {
                unwind(board, &slots, &mut frames);
                return Err(SolveError::BudgetExhausted);
            }
            nodes += 1;
            board.assign(pos, digit);
            frames.push(Frame { slot, value });
            slot += 1;
            first_value = 1;
            advanced = true;
            break;
        }
        if !advanced {
            // Dead end: undo the most recent placement and resume its slot
            // at the next digit. No placement left to undo means the search
            // space is exhausted.
            let Some(frame) = frames.pop() else {
                return Err(SolveError::Unsolvable);
            };
            board.retract(slot_position(slots[frame.slot]), Digit::from_value(frame.value));
            slot = frame.slot;
            first_value = frame.value + 1;
        }
    }
    Ok(nodes)
}

/// Retracts every placement on the stack, restoring the board to its state
/// at the start of the search.
fn unwind(board: &mut TagBoard, slots: &Slots, frames: &mut ArrayVec<[Frame; 81]>) {
    while let Some(frame) = frames.pop() {
        board.retract(slot_position(slots[frame.slot]), Digit::from_value(frame.value));
    }
}
