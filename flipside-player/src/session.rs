//! One side's view of a game in progress.

use crate::strategy::Strategy;
use flipside_othello::{Board, GameStatus, Move, Side};
use log::{debug, error, warn};
use std::time::{Duration, Instant};

/// Plays one side of a single game. The session owns its board for the whole
/// game: the opponent's moves are applied as they arrive, followed by our reply.
pub struct Session<S: Strategy> {
    board: Board,
    side: Side,
    strategy: S,
}

impl<S: Strategy> Session<S> {
    /// Start a game from the opening position, playing `side`.
    pub fn new(side: Side, strategy: S) -> Self {
        Self::from_board(Board::new(), side, strategy)
    }

    /// Pick up a game from an arbitrary position.
    pub fn from_board(board: Board, side: Side, strategy: S) -> Self {
        debug!("new session playing {}", side);
        Self {
            board,
            side,
            strategy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_done() {
            GameStatus::Done
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Done
    }

    /// Record the opponent's move and answer with ours.
    ///
    /// `opponents_move` is [`Move::Pass`] on the first move of the game or when
    /// the opponent passed. An illegal opponent move is logged and ignored.
    /// `time_left` is only checked once the reply has been chosen.
    pub fn play(&mut self, opponents_move: Move, time_left: Option<Duration>) -> Move {
        let start = Instant::now();
        let opponent = !self.side;

        if !opponents_move.is_pass() && !self.board.is_legal(opponents_move, opponent) {
            warn!("{} made an illegal move: {}", opponent, opponents_move);
        }
        self.board.apply(opponents_move, opponent);

        if self.is_finished() {
            debug!(
                "game over: Black {}, White {}",
                self.board.count_black(),
                self.board.count_white()
            );
            return Move::Pass;
        }

        let reply = self.strategy.choose_move(&self.board, self.side);
        if !self.board.is_legal(reply, self.side) {
            error!("strategy chose an illegal move for {}: {}", self.side, reply);
        }
        self.board.apply(reply, self.side);

        let elapsed = start.elapsed();
        match time_left {
            Some(budget) if elapsed > budget => {
                warn!("no time left: move took {:?} with {:?} remaining", elapsed, budget)
            }
            _ => debug!("{} played {} in {:?}", self.side, reply, elapsed),
        }

        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Greedy, Minimax};
    use flipside_othello::Location;

    fn at(x: usize, y: usize) -> Move {
        Move::Piece(Location::from_coords(x, y))
    }

    #[test]
    fn black_opens_without_opponent_move() {
        let mut session = Session::new(Side::Black, Greedy);
        let reply = session.play(Move::Pass, None);

        assert_eq!(reply, at(2, 3));
        assert_eq!(session.board().count_black(), 4);
        assert_eq!(session.board().count_white(), 1);
    }

    #[test]
    fn white_tracks_opponent_moves() {
        let mut session = Session::new(Side::White, Minimax::default());
        let reply = session.play(at(2, 3), Some(Duration::from_secs(60)));

        let mut expected = Board::new();
        expected.apply(at(2, 3), Side::Black);
        expected.apply(reply, Side::White);
        assert_eq!(session.board(), &expected);
        assert!(!reply.is_pass());
    }

    #[test]
    fn illegal_opponent_move_is_ignored() {
        let mut session = Session::new(Side::White, Greedy);
        let reply = session.play(at(0, 0), None);

        // The board stayed at the opening, so White answers from there.
        let mut expected = Board::new();
        expected.apply(reply, Side::White);
        assert_eq!(session.board(), &expected);
        assert!(!session.board().is_occupied(Location::from_coords(0, 0)));
    }

    #[test]
    fn finished_game_returns_pass() {
        let board: Board = format!("{}{}", "b".repeat(60), "....").parse().unwrap();
        let mut session = Session::from_board(board, Side::White, Greedy);

        assert!(session.is_finished());
        assert_eq!(session.play(Move::Pass, None), Move::Pass);
        assert_eq!(session.board(), &board);
    }

    #[test]
    fn blocked_side_passes() {
        let board: Board = format!("bw{}", ".".repeat(62)).parse().unwrap();
        let mut session = Session::from_board(board, Side::White, Greedy);

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.play(Move::Pass, None), Move::Pass);
    }

    #[test]
    fn closure_strategy_is_consulted() {
        let mut calls = 0;
        let mut session = Session::new(Side::Black, |board: &Board, side: Side| {
            calls += 1;
            Move::from(board.legal_moves(side).last())
        });

        assert_eq!(session.play(Move::Pass, None), at(5, 4));
        drop(session);
        assert_eq!(calls, 1);
    }
}
