//! "Perft" performance test: count the number of move paths of a given length.
//! Useful for checking the move generator against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::game::{Move, Side};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Side::Black, depth, false)
}

fn leaves_below(board: Board, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.legal_moves(side);
    if all_moves.is_empty() {
        // Both sides passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    all_moves
        .map(|loc| leaves_below(board.with_move(Move::Piece(loc), side), !side, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
#[ignore]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}
