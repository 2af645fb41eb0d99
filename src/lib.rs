//! Crate root module declarations for the Plum Match rules engine.
//!
//! Exposes the board and piece model, per-piece move generation, the match
//! state machine with check and checkmate detection, and small utilities
//! (square and placement conversions, seeded random playouts) so the binary,
//! benches and external front ends can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_mask;
    pub mod chess_piece;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub(crate) mod move_shared;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod match_state {
    pub mod check_inspection;
    pub mod chess_match;
    pub mod move_apply;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement_generator;
    pub mod placement_parser;
    pub mod playout;
}
