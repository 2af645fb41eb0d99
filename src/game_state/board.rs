//! 8x8 grid of optional pieces.
//!
//! Addressed by `Position`. Occupancy bitboards per color are kept in step with
//! the grid on every place and remove.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_mask::BoardMask;
use crate::game_state::chess_piece::Piece;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, Position};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    occupancy_by_color: [BoardMask; 2],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds test for raw coordinates, before they become a `Position`.
    #[inline]
    pub fn position_exists(&self, row: i32, column: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&column)
    }

    #[inline]
    pub fn piece(&self, position: Position) -> Option<&Piece> {
        self.squares[position.row() as usize][position.column() as usize].as_ref()
    }

    #[inline]
    pub fn there_is_a_piece(&self, position: Position) -> bool {
        self.piece(position).is_some()
    }

    pub fn place_piece(&mut self, piece: Piece, position: Position) -> Result<(), ChessErrors> {
        let slot = &mut self.squares[position.row() as usize][position.column() as usize];
        if slot.is_some() {
            return Err(ChessErrors::SquareOccupied(position));
        }
        *slot = Some(piece);
        self.occupancy_by_color[piece.color().index()].insert(position);
        Ok(())
    }

    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        let removed = self.squares[position.row() as usize][position.column() as usize].take();
        if let Some(piece) = &removed {
            self.occupancy_by_color[piece.color().index()].remove(position);
        }
        removed
    }

    /// Every occupied square with its piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(column, slot)| {
                slot.as_ref()
                    .map(|piece| (Position::from_square((row * BOARD_SIZE + column) as u8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    #[inline]
    pub fn occupancy(&self) -> BoardMask {
        self.occupancy_by_color[Color::White.index()] | self.occupancy_by_color[Color::Black.index()]
    }

    #[inline]
    pub fn occupancy_by_color(&self, color: Color) -> BoardMask {
        self.occupancy_by_color[color.index()]
    }

    /// Copy of the grid for rendering.
    pub fn grid(&self) -> [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        self.squares
    }
}
