use clap::{Parser, Subcommand};

use plum_match::game_state::chess_types::ChessPosition;

#[derive(Parser)]
#[command(name = "plum_match", version, about = "Two-player chess match engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play source/target square pairs from the starting position, e.g. `E2 E4 E7 E5`
    Replay {
        #[arg(required = true)]
        squares: Vec<ChessPosition>,
    },
    /// List the destinations of the piece on a square
    Moves {
        square: ChessPosition,
        /// Square pairs to play first
        #[arg(long, num_args = 1..)]
        after: Vec<ChessPosition>,
    },
    /// Let both sides play random legal moves
    Playout {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_plies: Option<u32>,
    },
}
