use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Position;

/// Inverse of `parse_placement`: rank 8 first, digits for empty runs.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for column in 0..BOARD_SIZE {
            let position = Position::from_square((row * BOARD_SIZE + column) as u8);
            if let Some(piece) = board.piece(position) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.placement_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_placement;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::utils::placement_parser::parse_placement;

    #[test]
    fn regenerates_parsed_placements() -> Result<(), ChessErrors> {
        for placement in [
            STARTING_PLACEMENT,
            "3rkr2/3p1p2/3P4/8/7Q/8/8/K7",
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1",
        ] {
            let board = parse_placement(placement)?;
            assert_eq!(generate_placement(&board), placement);
        }
        Ok(())
    }
}
