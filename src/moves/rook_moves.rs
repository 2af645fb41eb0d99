use crate::moves::move_shared::trace_ray;

/// Rook reach from `square`: each ray stops at and includes the first
/// occupied square. Callers remove own-color squares.
#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    let sq = square as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(sq, 0, 1, occupancy);
    attacks |= trace_ray(sq, 0, -1, occupancy);
    attacks |= trace_ray(sq, 1, 0, occupancy);
    attacks |= trace_ray(sq, -1, 0, occupancy);

    attacks
}
