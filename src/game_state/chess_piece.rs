//! A piece on (or captured from) the board.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::board_mask::BoardMask;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::moves::piece_moves::movement_mask;

/// Kind, color and move count of a piece, plus an identifier unique within a
/// match. The piece does not store its own position; the board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: u8,
    kind: PieceKind,
    color: Color,
    move_count: u32,
}

impl Piece {
    pub fn new(id: u8, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            move_count: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        debug_assert!(self.move_count > 0, "undo of a piece that never moved");
        self.move_count -= 1;
    }

    /// Destinations for this piece standing on `from`, ignoring whose turn it
    /// is and whether the move would expose the own king.
    pub fn possible_moves(&self, board: &Board, from: Position) -> BoardMask {
        movement_mask(board, self, from)
    }

    pub fn possible_move(&self, board: &Board, from: Position, target: Position) -> bool {
        self.possible_moves(board, from).contains(target)
    }

    pub fn is_there_any_possible_move(&self, board: &Board, from: Position) -> bool {
        self.possible_moves(board, from).any()
    }

    /// Placement letter: upper case for White, lower case for Black.
    pub fn placement_char(&self) -> char {
        let base = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placement_char())
    }
}
