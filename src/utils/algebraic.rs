//! Conversions between textual squares (`"E2"`) and `ChessPosition`.
//!
//! Only square coordinates are handled here; move notation is out of scope.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::ChessPosition;

/// Parse a square such as `"E2"` (case-insensitive column letter).
pub fn algebraic_to_chess_position(square: &str) -> Result<ChessPosition, ChessErrors> {
    let trimmed = square.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidPositionString(square.to_owned()));
    }

    let column = bytes[0].to_ascii_uppercase();
    let row = bytes[1];

    if !(b'A'..=b'H').contains(&column) || !(b'1'..=b'8').contains(&row) {
        return Err(ChessErrors::InvalidPositionString(square.to_owned()));
    }

    ChessPosition::new(char::from(column), row - b'0')
}

/// Format a chess position as its two-character square name.
pub fn chess_position_to_algebraic(position: ChessPosition) -> String {
    format!("{}{}", position.column(), position.row())
}
