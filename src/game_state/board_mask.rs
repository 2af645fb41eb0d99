//! One-bit-per-square mask over the board.
//!
//! Bit `row * 8 + column` marks a square. Move generation produces these, and
//! `to_grid` turns one into the `[[bool; 8]; 8]` view a presentation layer
//! consumes.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Position, Square};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoardMask(u64);

impl BoardMask {
    pub const EMPTY: BoardMask = BoardMask(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn from_position(position: Position) -> Self {
        Self(1u64 << position.square())
    }

    #[inline]
    pub const fn contains(self, position: Position) -> bool {
        (self.0 >> position.square()) & 1 != 0
    }

    #[inline]
    pub fn insert(&mut self, position: Position) {
        *self |= Self::from_position(position);
    }

    #[inline]
    pub fn remove(&mut self, position: Position) {
        *self = *self & !Self::from_position(position);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Marked positions in square order (A8 first, H1 last).
    pub fn iter(self) -> BoardMaskIter {
        BoardMaskIter(self.0)
    }

    pub fn to_grid(self) -> [[bool; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[false; BOARD_SIZE]; BOARD_SIZE];
        for position in self.iter() {
            grid[position.row() as usize][position.column() as usize] = true;
        }
        grid
    }
}

impl BitOr for BoardMask {
    type Output = BoardMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        BoardMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for BoardMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for BoardMask {
    type Output = BoardMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        BoardMask(self.0 & rhs.0)
    }
}

impl Not for BoardMask {
    type Output = BoardMask;

    fn not(self) -> Self::Output {
        BoardMask(!self.0)
    }
}

impl IntoIterator for BoardMask {
    type Item = Position;
    type IntoIter = BoardMaskIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct BoardMaskIter(u64);

impl Iterator for BoardMaskIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(Position::from_square(square))
    }
}
