//! Ways of choosing a move for one side of a board.

use crate::config::SearchConfig;
use crate::search;
use flipside_othello::{Board, Move, Side};

/// Chooses moves for a side. Must return [`Move::Pass`] exactly when `side`
/// has no legal placement.
pub trait Strategy {
    fn choose_move(&mut self, board: &Board, side: Side) -> Move;
}

/// Plays the move whose resulting position scores best right away.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn choose_move(&mut self, board: &Board, side: Side) -> Move {
        search::best_move_one_ply(board, side).into()
    }
}

/// Plays the move with the best minimax value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minimax {
    pub config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Strategy for Minimax {
    fn choose_move(&mut self, board: &Board, side: Side) -> Move {
        search::best_move(board, side, &self.config).into()
    }
}

/// Any closure over a board and a side is a strategy.
impl<F> Strategy for F
where
    F: FnMut(&Board, Side) -> Move,
{
    fn choose_move(&mut self, board: &Board, side: Side) -> Move {
        self(board, side)
    }
}
