mod cli;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{error, info};
use thiserror::Error;

use plum_match::chess_errors::ChessErrors;
use plum_match::game_state::chess_types::ChessPosition;
use plum_match::match_state::chess_match::ChessMatch;
use plum_match::utils::playout::{random_playout, PlayoutConfig, PlayoutOutcome};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Chess(#[from] ChessErrors),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("squares must come in source/target pairs, got {0}")]
    UnpairedSquares(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("PLUM_MATCH_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> Result<(), CliError> {
    let cfg_path: Option<PathBuf> = std::env::var_os("PLUM_MATCH_CONFIG_PATH").map(|s| s.into());
    let cfg = config::Config::load(cfg_path.as_ref())?;

    match cli.command {
        Some(cli::Commands::Replay { squares }) => {
            let chess_match = replay(&squares)?;
            print_status(&chess_match);
        }
        Some(cli::Commands::Moves { square, after }) => {
            let mut chess_match = replay(&after)?;
            let mask = chess_match.legal_moves(square)?;
            let targets: Vec<String> = mask
                .iter()
                .map(|position| ChessPosition::from_position(position).to_string())
                .collect();
            println!("{square}: {}", targets.join(" "));
        }
        Some(cli::Commands::Playout { seed, max_plies }) => {
            let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
            let config = PlayoutConfig {
                max_plies: max_plies.unwrap_or(cfg.max_plies),
            };
            info!("playout seed {seed}, at most {} plies", config.max_plies);

            let mut chess_match = ChessMatch::new();
            let report = random_playout(&mut chess_match, seed, config)?;
            for (ply, (source, target)) in report.moves.iter().enumerate() {
                println!("{:>3}. {source}-{target}", ply + 1);
            }
            match report.outcome {
                PlayoutOutcome::Checkmate { winner } => println!("checkmate, {winner} wins"),
                PlayoutOutcome::NoLegalMoves { side } => println!("{side} has no legal move"),
                PlayoutOutcome::PlyLimit => println!("stopped after {} plies", report.plies()),
            }
            println!("captured {}", report.captured);
            print_status(&chess_match);
        }
        None => {
            cli::Cli::command().print_help()?;
        }
    }
    Ok(())
}

fn replay(squares: &[ChessPosition]) -> Result<ChessMatch, CliError> {
    if squares.len() % 2 != 0 {
        return Err(CliError::UnpairedSquares(squares.len()));
    }
    let mut chess_match = ChessMatch::new();
    for pair in squares.chunks_exact(2) {
        chess_match.perform_move(pair[0], pair[1])?;
    }
    Ok(chess_match)
}

fn print_status(chess_match: &ChessMatch) {
    println!("turn {}", chess_match.turn());
    println!("current player {}", chess_match.current_player());
    println!("check {}", chess_match.check());
    println!("checkmate {}", chess_match.check_mate());
    println!("{}", chess_match.placement());
}
