//! Geometry helpers shared by the per-piece generators.
//!
//! Squares are indexed `row * 8 + column` with row 0 being rank 8.

/// One-hot bit for `(row, column)`, or an empty mask when off the board.
pub(crate) const fn set_if_valid(row: i32, column: i32) -> u64 {
    if row < 0 || row > 7 || column < 0 || column > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (column as usize);
    1u64 << square
}

/// Squares reached from `square` stepping by `(row_step, column_step)` until
/// the edge or the first occupied square, which is included.
pub(crate) fn trace_ray(square: i32, row_step: i32, column_step: i32, occupancy: u64) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut column = (square % 8) + column_step;
    let mut attacks = 0u64;

    while (0..8).contains(&row) && (0..8).contains(&column) {
        let bit = 1u64 << (row * 8 + column);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        row += row_step;
        column += column_step;
    }

    attacks
}
