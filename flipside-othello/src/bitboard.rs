//! Bit-sets over the 64 cells of an Othello board.
//!
//! Bit `i` stands for the cell with linear index `i = x + 8 * y`, so the
//! least-significant bit is the upper-left cell (A1) and bits proceed in
//! row-major order.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Cells holding a disc in the opening position.
pub const OPENING_OCCUPIED: Bitboard = Bitboard(0x0000_0018_1800_0000);

/// Cells owned by Black in the opening position: (4,3) and (3,4).
pub const OPENING_BLACK: Bitboard = Bitboard(0x0000_0008_1000_0000);

impl Bitboard {
    /// The bitboard with no cells set.
    pub const EMPTY: Self = Self(0);

    /// A bitboard with exactly the cell at `index` set.
    #[inline]
    pub const fn single(index: u8) -> Self {
        Self(1u64 << index)
    }

    /// All cells in column `x`.
    #[inline]
    pub const fn column(x: u8) -> Self {
        Self(0x0101_0101_0101_0101 << x)
    }

    /// Whether the cell at `index` is set.
    #[inline]
    pub fn contains(self, index: u8) -> bool {
        self.0 & (1u64 << index) != 0
    }

    /// Set or clear the cell at `index`.
    #[inline]
    pub fn set(&mut self, index: u8, value: bool) {
        if value {
            self.0 |= 1u64 << index;
        } else {
            self.0 &= !(1u64 << index);
        }
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every cell set in `self` is also set in `other`.
    #[inline]
    pub fn is_subset(self, other: Bitboard) -> bool {
        self.0 & !other.0 == 0
    }

    /// Index of the lowest set cell, or `None` for an empty bitboard.
    #[inline]
    pub fn lowest_index(self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    next_index: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index == NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.contains(self.next_index as u8);
        self.next_index += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - self.next_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            next_index: 0,
            bitboard: self,
        }
    }
}
