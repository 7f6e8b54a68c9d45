//! `flipside-player` chooses Othello moves for a [`flipside_othello::Board`].
//!
//!  - [`eval`] scores positions by disc count, optionally weighting corners.
//!  - [`search`] runs a fixed-depth minimax over copied boards.
//!  - [`strategy`] wraps move choice behind the [`Strategy`] trait.
//!  - [`session`] plays one side of a game, tracking the board between moves.

pub mod config;
pub mod eval;
pub mod search;
pub mod session;
pub mod strategy;

pub use config::{PassRule, SearchConfig};
pub use search::{best_move, best_move_minimax, best_move_one_ply, Value};
pub use session::Session;
pub use strategy::{Greedy, Minimax, Strategy};
