//! Pawn pushes and captures.
//!
//! White advances toward row 0 (rank 8), Black toward row 7 (rank 1). There
//! is no en passant and no promotion; a pawn on the last row simply has no
//! forward move.

use crate::game_state::chess_types::Color;
use crate::moves::move_shared::set_if_valid;

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_pawn_captures(-1);
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_pawn_captures(1);

#[inline]
pub const fn forward_step(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Diagonal squares a pawn could capture on, regardless of occupancy.
#[inline]
pub const fn pawn_captures(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[square as usize],
        Color::Black => BLACK_PAWN_CAPTURES[square as usize],
    }
}

/// Forward pushes plus captures onto `enemy_occupancy`.
///
/// The double push needs an unmoved pawn and both squares empty.
pub fn pawn_moves(
    color: Color,
    square: u8,
    move_count: u32,
    occupancy: u64,
    enemy_occupancy: u64,
) -> u64 {
    let mut moves = pawn_captures(color, square) & enemy_occupancy;

    let step = forward_step(color);
    let row = (square / 8) as i32;
    let column = (square % 8) as i32;

    let one_step = set_if_valid(row + step, column);
    if one_step != 0 && (one_step & occupancy) == 0 {
        moves |= one_step;

        if move_count == 0 {
            let two_step = set_if_valid(row + 2 * step, column);
            if two_step != 0 && (two_step & occupancy) == 0 {
                moves |= two_step;
            }
        }
    }

    moves
}

const fn generate_pawn_captures(step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let column = (sq % 8) as i32;

        table[sq] = set_if_valid(row + step, column - 1) | set_if_valid(row + step, column + 1);
        sq += 1;
    }

    table
}
