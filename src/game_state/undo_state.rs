use crate::game_state::chess_piece::Piece;
use crate::game_state::chess_types::{Color, Position};

/// Exact inverse of one executed move on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub source: Position,
    pub target: Position,
    pub captured_piece: Option<Piece>,
}

/// A committed move plus the match flags it overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchUndoState {
    pub undo: UndoState,
    pub prev_turn: u32,
    pub prev_current_player: Color,
    pub prev_check: bool,
    pub prev_check_mate: bool,
}
