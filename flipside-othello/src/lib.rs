//! `flipside-othello` models an Othello board and enforces its rules.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw 64-bit cell sets the board is built from.
//!  - [`Board`] holds disc occupancy and ownership, checks the bracketing rule
//!    by ray-casting in the eight compass directions, and applies captures in place.
//!    Illegal moves are silently ignored, which suits search code.
//!  - [`Game`] pairs a board with the side to move and rejects illegal moves
//!    with an [`IllegalMoveError`]. It is the safer interface for callers that
//!    take moves from the outside.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
