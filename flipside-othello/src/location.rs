//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A cell on the Othello board, stored as its linear index `x + 8 * y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// A set of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration visits columns left to right (`x` ascending) and each column top
/// to bottom (`y` ascending).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a linear cell index.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Self(index)
    }

    /// Convert into a linear cell index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    /// Convert from `x` and `y` coordinates.
    /// Panics if either coordinate is off the board.
    pub fn from_coords(x: usize, y: usize) -> Self {
        assert!(x < EDGE_LENGTH && y < EDGE_LENGTH);
        Self((x + y * EDGE_LENGTH) as u8)
    }

    /// Convert from signed coordinates, or `None` if they fall off the board.
    #[inline]
    pub fn checked(x: i8, y: i8) -> Option<Self> {
        if Self::on_board(x, y) {
            Some(Self((x + y * EDGE_LENGTH as i8) as u8))
        } else {
            None
        }
    }

    /// Whether `(x, y)` names a cell of the board.
    #[inline]
    pub fn on_board(x: i8, y: i8) -> bool {
        (0..EDGE_LENGTH as i8).contains(&x) && (0..EDGE_LENGTH as i8).contains(&y)
    }

    #[inline]
    pub fn x(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    #[inline]
    pub fn y(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    /// Get the `(x, y)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.x(), self.y())
    }

    /// The neighbouring cell one step along `(dx, dy)`, if it is on the board.
    #[inline]
    pub fn step(self, (dx, dy): (i8, i8)) -> Option<Self> {
        Self::checked(self.x() as i8 + dx, self.y() as i8 + dy)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.x()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.y()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4"):
/// the letter selects `x`, the digit selects `y`.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if !(1..=EDGE_LENGTH).contains(&row) || chars.next() != None {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(col, row - 1))
    }
}

impl LocationList {
    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc.to_index())
    }

    /// Add `loc` to this list.
    pub fn insert(&mut self, loc: Location) {
        self.0.set(loc.to_index(), true);
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let index = (0..EDGE_LENGTH as u8)
            .map(|x| self.0 & Bitboard::column(x))
            .find_map(Bitboard::lowest_index)?;
        self.0.set(index, false);

        Some(Location::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
