//! The Othello board: disc placement, the bracketing rule, and captures.
//!
//! A [`Board`] is two bitboards: which cells hold a disc, and which of those
//! discs are Black's. It is `Copy`, so simulating a move is a matter of
//! copying the board and applying the move to the copy.

use crate::bitboard::{self, Bitboard};
use crate::game::{Move, Side};
use crate::location::{Location, LocationList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use itertools::iproduct;
use std::fmt;

/// The eight compass directions a capture can run in, as `(dx, dy)` steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Disc occupancy and ownership for all 64 cells.
/// Invariant: every cell in `black` is also in `occupied`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    occupied: Bitboard,
    black: Bitboard,
}

impl Default for Board {
    /// The standard four-disc opening position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard four-disc opening position.
    pub const fn new() -> Self {
        Self {
            occupied: bitboard::OPENING_OCCUPIED,
            black: bitboard::OPENING_BLACK,
        }
    }

    /// Load a board from one marker per cell in index order:
    /// `b'b'` is Black, `b'w'` is White, and anything else is empty.
    pub fn from_markers(markers: &[u8; NUM_SPACES]) -> Self {
        let mut board = Self {
            occupied: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
        };

        for (index, &marker) in markers.iter().enumerate() {
            let loc = Location::from_index(index as u8);
            match marker {
                b'b' => board.place(Side::Black, loc),
                b'w' => board.place(Side::White, loc),
                _ => {}
            }
        }

        board
    }

    /// Cells holding a disc of either color.
    #[inline]
    pub fn occupied_mask(&self) -> Bitboard {
        self.occupied
    }

    /// Cells holding a Black disc.
    #[inline]
    pub fn black_mask(&self) -> Bitboard {
        self.black
    }

    #[inline]
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.occupied.contains(loc.to_index())
    }

    /// Whether `side` has a disc on `loc`.
    #[inline]
    pub fn owns(&self, side: Side, loc: Location) -> bool {
        self.is_occupied(loc) && (self.black.contains(loc.to_index()) == (side == Side::Black))
    }

    /// The owner of the disc on `loc`, if any.
    pub fn owner(&self, loc: Location) -> Option<Side> {
        if !self.is_occupied(loc) {
            None
        } else if self.black.contains(loc.to_index()) {
            Some(Side::Black)
        } else {
            Some(Side::White)
        }
    }

    /// Put a disc of `side` on `loc`, replacing whatever was there.
    /// Does not check legality and flips nothing.
    #[inline]
    pub fn place(&mut self, side: Side, loc: Location) {
        let index = loc.to_index();
        self.occupied.set(index, true);
        self.black.set(index, side == Side::Black);
    }

    #[inline]
    pub fn count(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.count_black(),
            Side::White => self.count_white(),
        }
    }

    #[inline]
    pub fn count_black(&self) -> u8 {
        self.black.count_occupied()
    }

    #[inline]
    pub fn count_white(&self) -> u8 {
        self.occupied.count_occupied() - self.black.count_occupied()
    }

    /// Check the ownership invariant: Black's discs all sit on occupied cells.
    pub fn is_consistent(&self) -> bool {
        self.black.is_subset(self.occupied)
    }

    /// Whether a run of `!side` discs starting next to `loc` along `dir`
    /// is closed off by a disc of `side`.
    fn brackets(&self, loc: Location, side: Side, dir: (i8, i8)) -> bool {
        let mut cursor = loc.step(dir);
        let mut run_length = 0;

        while let Some(cell) = cursor.filter(|&cell| self.owns(!side, cell)) {
            run_length += 1;
            cursor = cell.step(dir);
        }

        run_length > 0 && cursor.map_or(false, |cell| self.owns(side, cell))
    }

    /// Whether `side` may place a disc on `loc`.
    fn is_legal_placement(&self, loc: Location, side: Side) -> bool {
        !self.is_occupied(loc)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.brackets(loc, side, dir))
    }

    /// Whether `mv` is legal for `side`. Passing is legal only when `side`
    /// has no legal placement anywhere on the board.
    pub fn is_legal(&self, mv: Move, side: Side) -> bool {
        match mv {
            Move::Pass => !self.has_moves(side),
            Move::Piece(loc) => self.is_legal_placement(loc, side),
        }
    }

    /// Every cell in enumeration order: `x` ascending, then `y` ascending.
    fn cells() -> impl Iterator<Item = Location> {
        iproduct!(0..EDGE_LENGTH, 0..EDGE_LENGTH).map(|(x, y)| Location::from_coords(x, y))
    }

    /// Whether `side` has at least one legal placement.
    pub fn has_moves(&self, side: Side) -> bool {
        Self::cells().any(|loc| self.is_legal_placement(loc, side))
    }

    /// The game is over once neither side can place a disc.
    /// The board does not need to be full.
    pub fn is_done(&self) -> bool {
        !(self.has_moves(Side::Black) || self.has_moves(Side::White))
    }

    /// All cells `side` may place a disc on.
    pub fn legal_moves(&self, side: Side) -> LocationList {
        let mut moves = LocationList::default();
        for loc in Self::cells().filter(|&loc| self.is_legal_placement(loc, side)) {
            moves.insert(loc);
        }
        moves
    }

    /// Play `mv` for `side`, flipping every bracketed run of opponent discs.
    /// Passes and illegal moves leave the board untouched.
    pub fn apply(&mut self, mv: Move, side: Side) {
        let loc = match mv {
            Move::Piece(loc) if self.is_legal_placement(loc, side) => loc,
            _ => return,
        };

        for &dir in DIRECTIONS.iter() {
            if !self.brackets(loc, side, dir) {
                continue;
            }

            let mut cursor = loc.step(dir);
            while let Some(cell) = cursor.filter(|&cell| self.owns(!side, cell)) {
                self.place(side, cell);
                cursor = cell.step(dir);
            }
        }

        self.place(side, loc);
    }

    /// Copy this board and play `mv` on the copy.
    #[inline]
    pub fn with_move(&self, mv: Move, side: Side) -> Self {
        let mut next = *self;
        next.apply(mv, side);
        next
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "expected 64 cell markers, found {}", found)]
pub struct ParseBoardError {
    pub found: usize,
}

/// Parse a board fixture: 64 markers (`b`, `w`, or anything else for an
/// empty cell) in index order. Whitespace is ignored, so fixtures may be
/// written as an 8x8 grid.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut markers = [0u8; NUM_SPACES];
        let mut found = 0;

        for marker in utils::fixture_markers(s) {
            if found < NUM_SPACES {
                markers[found] = if marker.is_ascii() { marker as u8 } else { 0 };
            }
            found += 1;
        }

        if found != NUM_SPACES {
            return Err(ParseBoardError { found });
        }

        Ok(Self::from_markers(&markers))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            (0..NUM_SPACES as u8).map(|index| match self.owner(Location::from_index(index)) {
                Some(Side::Black) => '#',
                Some(Side::White) => 'O',
                None => '.',
            }),
            f,
        )
    }
}
