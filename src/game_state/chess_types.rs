//! Core value types shared by the board, move generation and the match.
//!
//! Coordinates come in two flavours: `Position` is the zero-based
//! `(row, column)` pair used internally, with row 0 being rank 8, and
//! `ChessPosition` is the user-facing `A1..H8` form.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::{algebraic_to_chess_position, chess_position_to_algebraic};

/// Side owning a piece, and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. The color lives on the piece itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// Board square index (`0..=63`), `row * 8 + column`.
pub type Square = u8;

/// Zero-based board coordinate. Always within the 8x8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    pub fn new(row: u8, column: u8) -> Result<Self, ChessErrors> {
        if (row as usize) < BOARD_SIZE && (column as usize) < BOARD_SIZE {
            Ok(Self { row, column })
        } else {
            Err(ChessErrors::PositionOutOfBounds { row, column })
        }
    }

    /// Inverse of [`Position::square`]. `square` must be below 64.
    #[inline]
    pub(crate) const fn from_square(square: Square) -> Self {
        Self {
            row: square / 8,
            column: square % 8,
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.row * 8 + self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// User-facing coordinate: column letter `A..=H` and row number `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPosition {
    column: char,
    row: u8,
}

impl ChessPosition {
    pub fn new(column: char, row: u8) -> Result<Self, ChessErrors> {
        if !('A'..='H').contains(&column) || !(1..=8).contains(&row) {
            return Err(ChessErrors::InvalidChessPosition { column, row });
        }
        Ok(Self { column, row })
    }

    #[inline]
    pub const fn column(self) -> char {
        self.column
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// `row = 8 - number`, `column = letter - 'A'`.
    pub fn to_position(self) -> Position {
        Position {
            row: 8 - self.row,
            column: self.column as u8 - b'A',
        }
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            column: char::from(b'A' + position.column()),
            row: 8 - position.row(),
        }
    }
}

impl From<Position> for ChessPosition {
    fn from(position: Position) -> Self {
        ChessPosition::from_position(position)
    }
}

impl From<ChessPosition> for Position {
    fn from(position: ChessPosition) -> Self {
        position.to_position()
    }
}

impl FromStr for ChessPosition {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_chess_position(s)
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&chess_position_to_algebraic(*self))
    }
}
