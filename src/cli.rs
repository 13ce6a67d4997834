//! Command-line interface for strictly_othello.

use clap::{Parser, Subcommand};
use strictly_othello::{Difficulty, Player};

/// Strictly Othello - Othello against an alpha-beta engine
#[derive(Parser, Debug)]
#[command(name = "strictly_othello")]
#[command(about = "Play Othello against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, global = true, default_value = "othello.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play as Dark against the engine in the terminal
    Play {
        /// Engine strength (weak, normal, strong); overrides the settings file
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Search a position and report the engine's choice
    Search {
        /// Search depth in plies
        #[arg(short, long, default_value = "3")]
        depth: u8,

        /// Side to move (dark or light)
        #[arg(short, long, default_value = "light")]
        side: Player,

        /// File holding the board as eight lines of '.', 'X', 'O'
        #[arg(short, long)]
        board: Option<std::path::PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
