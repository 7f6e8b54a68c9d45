//! Fixed-depth minimax search.
//!
//! Every node copies the board before playing a move on it, so no branch can
//! disturb another and nothing needs to be undone. There is no pruning: the
//! work grows with the branching factor to the power of the look-ahead.

use crate::config::{PassRule, SearchConfig};
use crate::eval;
use arrayvec::ArrayVec;
use flipside_othello::{Board, Location, Move, Side};
use itertools::Itertools;
use log::{debug, trace};

/// The backed-up value of a line, seen from the searching side.
///
/// The variants are ordered from worst to best, so lines compare with
/// `<`/`max`/`min` directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// The searching side had no legal move on this line.
    Stranded,
    /// A scored leaf position.
    Scored(i32),
    /// The opponent had no legal move on this line.
    OpponentStranded,
}

/// A root move and the value the search gave it.
pub type RootValues = ArrayVec<[(Location, Value); 64]>;

/// The value of a line that ended because `blocked` could not move.
fn blocked_value(my_side: Side, blocked: Side) -> Value {
    if blocked == my_side {
        Value::Stranded
    } else {
        Value::OpponentStranded
    }
}

/// Value of `board` for `my_side`, where `last_move` was just played by
/// `!side_to_move` and `ply` plies have been played since the root.
fn minimax_value(
    board: &Board,
    my_side: Side,
    side_to_move: Side,
    last_move: Location,
    config: &SearchConfig,
    ply: u32,
) -> Value {
    if ply >= config.look_ahead {
        return Value::Scored(eval::minimax_score(
            board,
            my_side,
            !side_to_move,
            last_move,
        ));
    }

    let moves = board.legal_moves(side_to_move);
    if moves.is_empty() {
        return match config.pass_rule {
            PassRule::DeadEnd => blocked_value(my_side, side_to_move),
            PassRule::Continue if board.has_moves(!side_to_move) => {
                minimax_value(board, my_side, !side_to_move, last_move, config, ply)
            }
            PassRule::Continue => Value::Scored(eval::simple_score(board, my_side)),
        };
    }

    let children = moves.map(|loc| {
        let child = board.with_move(Move::Piece(loc), side_to_move);
        minimax_value(&child, my_side, !side_to_move, loc, config, ply + 1)
    });

    let combined = if side_to_move == my_side {
        children.max()
    } else {
        children.min()
    };

    // `moves` was not empty, so there is always a child.
    combined.unwrap_or_else(|| blocked_value(my_side, side_to_move))
}

/// Search every legal move of `side` and return each with its value,
/// in enumeration order.
pub fn root_values(board: &Board, side: Side, config: &SearchConfig) -> RootValues {
    board
        .legal_moves(side)
        .map(|loc| {
            let child = board.with_move(Move::Piece(loc), side);
            (loc, minimax_value(&child, side, !side, loc, config, 1))
        })
        .collect()
}

/// The first move whose value is strictly greater than every earlier one.
fn first_best(values: &RootValues) -> Option<(Location, Value)> {
    values.iter().fold(None, |best, &(loc, value)| match best {
        Some((_, best_value)) if value <= best_value => best,
        _ => Some((loc, value)),
    })
}

/// Choose a move for `side`, or `None` if it has no legal placement and must pass.
/// Ties go to the earliest move in enumeration order.
pub fn best_move(board: &Board, side: Side, config: &SearchConfig) -> Option<Location> {
    let values = root_values(board, side, config);
    trace!(
        "{} root values: {}",
        side,
        values
            .iter()
            .map(|(loc, value)| format!("{}={:?}", loc, value))
            .join(", ")
    );

    // Every value is comparable, so any candidate yields a choice, even when
    // all of them are `Stranded`.
    let (loc, value) = first_best(&values)?;
    debug!(
        "{} plays {} ({:?}) at look-ahead {}",
        side, loc, value, config.look_ahead
    );
    Some(loc)
}

/// Pick the move whose resulting position scores best with the heuristic evaluator.
pub fn best_move_one_ply(board: &Board, side: Side) -> Option<Location> {
    best_move(board, side, &SearchConfig::default().with_look_ahead(1))
}

/// Pick a move by minimax over `look_ahead` plies, treating a blocked side as a dead end.
pub fn best_move_minimax(board: &Board, side: Side, look_ahead: u32) -> Option<Location> {
    best_move(
        board,
        side,
        &SearchConfig::default().with_look_ahead(look_ahead),
    )
}
