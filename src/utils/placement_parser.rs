//! Piece-placement parser.
//!
//! Reads the first field of a FEN string (rank 8 first, ranks separated by
//! `/`, digits for runs of empty squares, `PRNBQK` for White and `prnbqk` for
//! Black) into a `Board`. Pieces get identifiers in reading order.
//!
//! A pawn away from its home row is recorded as already moved, so it never
//! gets the double step.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_piece::Piece;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Color, PieceKind, Position};

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessErrors::InvalidPlacement(format!(
            "placement must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new();
    let mut next_id = 0u8;

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut column = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                column += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_placement_char(ch).ok_or_else(|| {
                ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            if column >= BOARD_SIZE {
                return Err(ChessErrors::InvalidPlacement(format!(
                    "rank {} has too many files",
                    BOARD_SIZE - row
                )));
            }

            let position = Position::new(row as u8, column as u8)?;
            let mut piece = Piece::new(next_id, kind, color);
            if kind == PieceKind::Pawn && row != pawn_home_row(color) {
                piece.increase_move_count();
            }
            board.place_piece(piece, position)?;
            next_id = next_id.checked_add(1).ok_or_else(|| {
                ChessErrors::InvalidPlacement("too many pieces".to_owned())
            })?;
            column += 1;
        }

        if column != BOARD_SIZE {
            return Err(ChessErrors::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                BOARD_SIZE - row
            )));
        }
    }

    Ok(board)
}

fn pawn_home_row(color: Color) -> usize {
    match color {
        Color::White => BOARD_SIZE - 2,
        Color::Black => 1,
    }
}

fn piece_from_placement_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'r' => PieceKind::Rook,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
