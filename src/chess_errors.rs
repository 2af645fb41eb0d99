//! Errors used throughout the match engine.
//!
//! `ChessErrors` is the single error type returned by board manipulation,
//! move validation, placement parsing and check inspection. Each variant
//! carries the squares or colors involved so callers can present precise
//! messages.
//!
//! Usage guidelines:
//! - Input and precondition variants (`NoPieceAtSource`, `IllegalTarget`,
//!   `SelfCheckForbidden`, ...) are expected during play; a UI re-prompts.
//! - `MissingKing` and `TryToViewOrEditEmptySquare` indicate a corrupted
//!   setup or undo record and are not meant to be recovered from.

use thiserror::Error;

use crate::game_state::chess_types::{ChessPosition, Color, Position};

/// Unified error type for the match engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The source square of a query or move is empty.
    #[error("there is no piece at source position {0}")]
    NoPieceAtSource(ChessPosition),

    /// The piece at the source square has no destination at all.
    #[error("there are no possible moves for the piece at {0}")]
    NoLegalMoves(ChessPosition),

    /// The piece at the source square belongs to the side not to move.
    #[error("the piece at {position} is {color}, not the current player's")]
    NotYourPiece { position: ChessPosition, color: Color },

    /// The target square is not in the source piece's movement mask.
    #[error("the piece at {from} cannot move to {to}")]
    IllegalTarget { from: ChessPosition, to: ChessPosition },

    /// The move would leave the mover's own king attacked. The move has been
    /// rolled back before this is returned.
    #[error("you cannot put yourself in check")]
    SelfCheckForbidden,

    /// A color has no king on the board.
    ///
    /// This represents a corrupted game state; treat it as a fatal logic error.
    #[error("there is no {0} king on the board")]
    MissingKing(Color),

    /// A move was requested after checkmate ended the match.
    #[error("the match is over")]
    MatchIsOver,

    /// `undo_last_move` was called with an empty history.
    #[error("there is no move to undo")]
    NothingToUndo,

    /// A chess position was built from a column letter or row number outside
    /// `A..=H` / `1..=8`.
    #[error("invalid chess position {column}{row}: valid values are from A1 to H8")]
    InvalidChessPosition { column: char, row: u8 },

    /// A textual chess position could not be parsed.
    #[error("invalid chess position string: {0:?}")]
    InvalidPositionString(String),

    /// Zero-based coordinates outside the 8x8 board.
    #[error("position ({row}, {column}) is out of bounds")]
    PositionOutOfBounds { row: u8, column: u8 },

    /// Attempted to place a piece on an occupied square.
    #[error("there is already a piece at {0}")]
    SquareOccupied(Position),

    /// Attempted to view or edit a square that is empty. Raised when an undo
    /// record no longer matches the board.
    #[error("square {0} is empty")]
    TryToViewOrEditEmptySquare(Position),

    /// A piece-placement string was malformed or describes an unplayable
    /// setup.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}
