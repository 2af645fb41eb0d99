//! Canonical chess-rule constants.
//!
//! Board dimensions and the standard starting placement used to initialize a
//! new match.

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Standard starting placement (first field of the starting FEN).
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Pieces created by the standard setup.
pub const STANDARD_PIECE_COUNT: usize = 32;
