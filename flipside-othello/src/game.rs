//! Implements game-level Othello logic.
//!
//! [`Game`] wraps a [`Board`] together with the side to move and checks every
//! move it is given. For hot loops, use [`Board`] directly.

use crate::board::Board;
use crate::location::{Location, LocationList, ParseLocationError};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid side string")]
pub struct ParseSideError;

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Side::Black),
            "white" | "w" => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}

/// A move in an Othello game: place a disc on a cell, or pass.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Move {
    Piece(Location),
    Pass,
}

impl Move {
    #[inline]
    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }

    /// The cell this move places a disc on, or `None` for a pass.
    #[inline]
    pub fn location(self) -> Option<Location> {
        match self {
            Move::Piece(loc) => Some(loc),
            Move::Pass => None,
        }
    }
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Move::Piece(loc)
    }
}

impl From<Option<Location>> for Move {
    fn from(loc: Option<Location>) -> Self {
        loc.map_or(Move::Pass, Move::Piece)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece(loc) => fmt::Display::fmt(loc, f),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid move string")]
pub struct ParseMoveError;

impl From<ParseLocationError> for ParseMoveError {
    fn from(_: ParseLocationError) -> Self {
        ParseMoveError
    }
}

/// Build a [`Move`] from string notation ("A4"; "PASS").
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }

        Ok(Move::Piece(s.parse()?))
    }
}

/// Returned when a [`Game`] is asked to make a move the rules forbid.
#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "{} may not play {}", side, mv)]
pub struct IllegalMoveError {
    pub side: Side,
    pub mv: Move,
}

/// Whether a game can still continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Done,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub active_side: Side,
}

impl Default for Game {
    /// The opening position with Black to move.
    fn default() -> Self {
        Self::new(Board::default(), Side::default())
    }
}

impl Game {
    pub fn new(board: Board, active_side: Side) -> Self {
        Self { board, active_side }
    }

    /// The cells the active side may play on.
    #[inline]
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves(self.active_side)
    }

    /// Whether `mv` is legal for the active side.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.is_legal(mv, self.active_side)
    }

    /// Make a move for the active side, returning the following position.
    /// Passing is only allowed when the active side has no placement.
    pub fn apply_move(&self, mv: Move) -> Result<Self, IllegalMoveError> {
        if !self.is_legal(mv) {
            return Err(IllegalMoveError {
                side: self.active_side,
                mv,
            });
        }

        let mut board = self.board;
        board.apply(mv, self.active_side);
        Ok(Self::new(board, !self.active_side))
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_done() {
            GameStatus::Done
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status() == GameStatus::Done
    }

    /// The side with more discs once the game is finished.
    /// `None` while the game continues, or if it ended in a draw.
    pub fn winner(&self) -> Option<Side> {
        if !self.is_finished() {
            return None;
        }

        let black = self.board.count_black();
        let white = self.board.count_white();
        if black > white {
            Some(Side::Black)
        } else if white > black {
            Some(Side::White)
        } else {
            None
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "{} to move (Black {}, White {})",
            self.active_side,
            self.board.count_black(),
            self.board.count_white()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_not_and_parse() {
        assert_eq!(!Side::Black, Side::White);
        assert_eq!(!!Side::White, Side::White);
        assert_eq!("B".parse(), Ok(Side::Black));
        assert_eq!("white".parse(), Ok(Side::White));
        assert_eq!("grey".parse::<Side>(), Err(ParseSideError));
        assert_eq!(Side::White.to_string(), "White");
    }

    #[test]
    fn move_notation() {
        assert_eq!("pass".parse(), Ok(Move::Pass));
        assert_eq!(
            "c4".parse(),
            Ok(Move::Piece(Location::from_coords(2, 3)))
        );
        assert_eq!("Z9".parse::<Move>(), Err(ParseMoveError));
        assert_eq!(Move::Pass.to_string(), "PASS");
        assert_eq!(Move::from(Location::from_coords(7, 0)).to_string(), "H1");
        assert_eq!(Move::from(None::<Location>), Move::Pass);
    }

    #[test]
    fn apply_move_alternates_sides() {
        let game = Game::default();
        let next = game
            .apply_move(Move::Piece(Location::from_coords(2, 3)))
            .unwrap();

        assert_eq!(next.active_side, Side::White);
        assert_eq!(next.board.count_black(), 4);
        assert_eq!(game.board, Board::default());
    }

    #[test]
    fn apply_move_rejects_illegal() {
        let game = Game::default();
        let corner = Move::Piece(Location::from_coords(0, 0));

        assert_eq!(
            game.apply_move(corner),
            Err(IllegalMoveError {
                side: Side::Black,
                mv: corner
            })
        );
        assert!(game.apply_move(Move::Pass).is_err());
    }

    #[test]
    fn illegal_move_message() {
        let err = IllegalMoveError {
            side: Side::White,
            mv: Move::Pass,
        };
        assert_eq!(err.to_string(), "White may not play PASS");
    }

    #[test]
    fn opening_is_in_progress() {
        let game = Game::default();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winner(), None);
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn finished_game_has_winner() {
        let mut markers = [b'b'; 64];
        markers[63] = b'w';
        let game = Game::new(Board::from_markers(&markers), Side::White);

        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Side::Black));
    }
}
