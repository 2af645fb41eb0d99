//! Check detection over a board.
//!
//! A king is in check when any opponent piece's movement mask marks its
//! square. Self-check is not filtered out of the opponent masks: a pinned
//! piece still gives check.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_mask::BoardMask;
use crate::game_state::chess_piece::Piece;
use crate::game_state::chess_types::{Color, PieceKind, Position};

/// Position of `color`'s king. A missing king is a corrupted setup.
pub fn king_position(board: &Board, color: Color) -> Result<Position, ChessErrors> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind() == PieceKind::King)
        .map(|(position, _)| position)
        .ok_or(ChessErrors::MissingKing(color))
}

/// Union of the movement masks of every `attacker` piece.
pub fn attacked_squares(board: &Board, attacker: Color) -> BoardMask {
    board
        .pieces_of(attacker)
        .fold(BoardMask::EMPTY, |acc, (position, piece)| {
            acc | piece.possible_moves(board, position)
        })
}

pub fn is_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = king_position(board, color)?;
    Ok(board
        .pieces_of(color.opposite())
        .any(|(position, piece)| piece.possible_move(board, position, king)))
}

/// Every `attacker` piece whose mask marks `target`.
pub fn attackers_to_square(board: &Board, target: Position, attacker: Color) -> Vec<(Position, Piece)> {
    board
        .pieces_of(attacker)
        .filter(|(position, piece)| piece.possible_move(board, *position, target))
        .map(|(position, piece)| (position, *piece))
        .collect()
}
