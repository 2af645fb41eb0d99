//! King step table. No castling.

use crate::moves::move_shared::set_if_valid;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let column = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 1, column - 1);
        attacks |= set_if_valid(row - 1, column);
        attacks |= set_if_valid(row - 1, column + 1);
        attacks |= set_if_valid(row, column - 1);
        attacks |= set_if_valid(row, column + 1);
        attacks |= set_if_valid(row + 1, column - 1);
        attacks |= set_if_valid(row + 1, column);
        attacks |= set_if_valid(row + 1, column + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}
