//! Static position scores.
//!
//! All scores are disc-count differentials seen from one side. The weighted
//! variants scale one side's count by the strategic value of the last cell
//! played: corners can never be flipped back, while the cells around a corner
//! tend to hand it to the opponent.

use flipside_othello::{Board, Location, Side, EDGE_LENGTH};

/// Multiplier for a move onto a corner.
pub const CORNER_WEIGHT: i32 = 3;

/// Multiplier for a move next to a corner.
pub const CORNER_ADJACENT_WEIGHT: i32 = -3;

const LAST: usize = EDGE_LENGTH - 1;

fn is_corner(loc: Location) -> bool {
    let (x, y) = loc.to_coords();
    (x == 0 || x == LAST) && (y == 0 || y == LAST)
}

/// The 2x2 blocks in each corner. Includes the corners themselves.
fn is_near_corner(loc: Location) -> bool {
    let (x, y) = loc.to_coords();
    (x <= 1 || x >= LAST - 1) && (y <= 1 || y >= LAST - 1)
}

/// The weight a move onto `loc` gives its mover's disc count.
pub fn position_weight(loc: Location) -> i32 {
    if is_corner(loc) {
        CORNER_WEIGHT
    } else if is_near_corner(loc) {
        CORNER_ADJACENT_WEIGHT
    } else {
        1
    }
}

/// `side`'s disc count minus its opponent's.
pub fn simple_score(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(!side) as i32
}

/// Like [`simple_score`], with `side`'s own count weighted by `last_move`.
pub fn heuristic_score(board: &Board, side: Side, last_move: Location) -> i32 {
    minimax_score(board, side, side, last_move)
}

/// Score for `my_side` after `mover` played `last_move`.
///
/// The position weight scales the mover's count, whichever side that is;
/// the result is still `my_side`'s count minus the opponent's.
pub fn minimax_score(board: &Board, my_side: Side, mover: Side, last_move: Location) -> i32 {
    let weight = position_weight(last_move);
    let mine = board.count(my_side) as i32;
    let theirs = board.count(!my_side) as i32;

    if mover == my_side {
        weight * mine - theirs
    } else {
        mine - weight * theirs
    }
}
