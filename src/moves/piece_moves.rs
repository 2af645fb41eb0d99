//! Per-kind dispatch from a piece on the board to its movement mask.

use crate::game_state::board::Board;
use crate::game_state::board_mask::BoardMask;
use crate::game_state::chess_piece::Piece;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares `piece` standing on `from` may move to: in bounds, never onto its
/// own color. Self-check is not considered here.
pub fn movement_mask(board: &Board, piece: &Piece, from: Position) -> BoardMask {
    let square = from.square();
    let color = piece.color();
    let occupancy = board.occupancy().bits();

    let reach = match piece.kind() {
        PieceKind::Pawn => {
            let enemy = board.occupancy_by_color(color.opposite()).bits();
            pawn_moves(color, square, piece.move_count(), occupancy, enemy)
        }
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    };

    BoardMask::from_bits(reach) & !board.occupancy_by_color(color)
}
