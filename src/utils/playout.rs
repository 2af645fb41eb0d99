//! Random playouts over a `ChessMatch`.
//!
//! Both sides pick uniformly among their legal moves until the match is
//! mated, the side to move is stuck, or the ply limit is reached. A seeded
//! `StdRng` makes a playout reproducible.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{ChessPosition, Color};
use crate::match_state::chess_match::ChessMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: Color },
    /// Side to move has no legal move but is not in check.
    NoLegalMoves { side: Color },
    PlyLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: u32,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutReport {
    pub outcome: PlayoutOutcome,
    pub moves: Vec<(ChessPosition, ChessPosition)>,
    pub captured: usize,
}

impl PlayoutReport {
    #[inline]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

pub fn random_playout(
    chess_match: &mut ChessMatch,
    seed: u64,
    config: PlayoutConfig,
) -> Result<PlayoutReport, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_playout_with_rng(chess_match, &mut rng, config)
}

pub fn random_playout_with_rng<R: Rng + ?Sized>(
    chess_match: &mut ChessMatch,
    rng: &mut R,
    config: PlayoutConfig,
) -> Result<PlayoutReport, ChessErrors> {
    if chess_match.check_mate() {
        return Err(ChessErrors::MatchIsOver);
    }

    let mut moves = Vec::new();
    let outcome = loop {
        if moves.len() >= config.max_plies as usize {
            break PlayoutOutcome::PlyLimit;
        }

        let legal_moves = chess_match.all_legal_moves()?;
        let Some(&(source, target)) = legal_moves.as_slice().choose(rng) else {
            break PlayoutOutcome::NoLegalMoves {
                side: chess_match.current_player(),
            };
        };

        let mover = chess_match.current_player();
        chess_match.perform_move(source, target)?;
        moves.push((source, target));

        if chess_match.check_mate() {
            break PlayoutOutcome::Checkmate { winner: mover };
        }
    };

    debug!("playout finished after {} plies: {outcome:?}", moves.len());

    Ok(PlayoutReport {
        outcome,
        captured: chess_match.captured_pieces().len(),
        moves,
    })
}
