//! Executes a move on the board and reverses it exactly.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::game_state::undo_state::UndoState;

/// Moves the piece on `source` to `target`, capturing whatever stood there.
/// No legality checks.
pub fn make_move(board: &mut Board, source: Position, target: Position) -> Result<UndoState, ChessErrors> {
    let mut piece = board
        .remove_piece(source)
        .ok_or(ChessErrors::TryToViewOrEditEmptySquare(source))?;
    piece.increase_move_count();
    let captured_piece = board.remove_piece(target);
    board.place_piece(piece, target)?;

    Ok(UndoState {
        source,
        target,
        captured_piece,
    })
}

/// Inverse of [`make_move`]: mover back to source with its count decremented,
/// captured piece back on target.
pub fn undo_move(board: &mut Board, undo: &UndoState) -> Result<(), ChessErrors> {
    let mut piece = board
        .remove_piece(undo.target)
        .ok_or(ChessErrors::TryToViewOrEditEmptySquare(undo.target))?;
    piece.decrease_move_count();
    board.place_piece(piece, undo.source)?;

    if let Some(captured) = undo.captured_piece {
        board.place_piece(captured, undo.target)?;
    }

    Ok(())
}
