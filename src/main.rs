//! Strictly Othello - terminal driver
//!
//! A thin presentation layer over the game controller: renders the board,
//! reads moves from stdin, and triggers the engine's reply.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use strictly_othello::{
    Board, Difficulty, GameController, Phase, Player, Position, Searcher, Settings, BOARD_SIZE,
    HUMAN, INF,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Handle for swapping the log filter after settings load.
type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Filter in force until settings are loaded.
const STARTUP_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter = init_tracing();
    let settings = Settings::load_or_default(&cli.config)?;
    apply_log_filter(filter.as_ref(), &settings)?;

    match cli.command {
        Command::Play { difficulty } => {
            let settings = match difficulty {
                Some(d) => settings.with_difficulty(d),
                None => settings,
            };
            run_play(&settings)
        }
        Command::Search {
            depth,
            side,
            board,
            json,
        } => run_search(depth, side, board.as_deref(), json),
    }
}

/// Logs to stderr so the board on stdout stays readable.
///
/// Returns a handle for the settings file's filter, or `None` when
/// `RUST_LOG` already chose one.
fn init_tracing() -> Option<FilterHandle> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let reloadable = from_env.is_none();
    let (filter, handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new(STARTUP_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    reloadable.then_some(handle)
}

/// Switches to the configured log filter.
fn apply_log_filter(handle: Option<&FilterHandle>, settings: &Settings) -> Result<()> {
    if let Some(handle) = handle {
        handle
            .reload(EnvFilter::new(settings.log_filter()))
            .context("Failed to apply log filter")?;
        debug!(filter = %settings.log_filter(), "Log filter applied");
    }
    Ok(())
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(usize, usize),
    New,
    Difficulty(Difficulty),
    Help,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let words: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        ["q" | "quit" | "exit"] => Input::Quit,
        ["n" | "new"] => Input::New,
        ["h" | "help" | "?"] => Input::Help,
        ["d" | "difficulty", level] => level
            .parse()
            .map(Input::Difficulty)
            .unwrap_or(Input::Unknown),
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(r), Ok(c)) => Input::Move(r, c),
            _ => Input::Unknown,
        },
        _ => Input::Unknown,
    }
}

fn print_help() {
    println!("Enter a move as 'row col' (0-7), e.g. '2 3'.");
    println!("Commands: new, difficulty <weak|normal|strong>, help, quit");
}

fn render(controller: &GameController) {
    let legal = if controller.phase() == Phase::HumanToMove {
        controller.legal_moves(HUMAN)
    } else {
        Vec::new()
    };

    println!();
    let header: Vec<String> = (0..BOARD_SIZE).map(|c| c.to_string()).collect();
    println!("  {}", header.join(" "));
    for (r, row) in controller.board().rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let marked = Position::new(r, c).is_some_and(|p| legal.contains(&p));
                let symbol = if marked { '*' } else { cell.symbol() };
                symbol.to_string()
            })
            .collect();
        println!("{} {}", r, cells.join(" "));
    }

    let score = controller.score();
    println!(
        "X (you): {}   O (engine, {}): {}",
        score.dark,
        controller.difficulty(),
        score.light
    );
}

#[instrument(skip(settings), fields(difficulty = %settings.difficulty()))]
fn run_play(settings: &Settings) -> Result<()> {
    info!("Starting terminal game");
    let mut controller = GameController::with_difficulty(*settings.difficulty());
    let mut lines = io::stdin().lock().lines();

    print_help();
    loop {
        if controller.phase() == Phase::AutomatedPending {
            let ply = controller.trigger_automated_move()?;
            match ply.played {
                Some(pos) => println!(
                    "Engine plays {} (value {}, {} nodes)",
                    pos, ply.value, ply.nodes
                ),
                None => println!("Engine passes"),
            }
            if ply.human_passed {
                println!("You have no legal move; engine moves again.");
            }
            continue;
        }

        render(&controller);
        if let Some(outcome) = controller.winner() {
            println!("Game over: {}. Type 'new' to play again or 'quit'.", outcome);
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        let input = parse_input(&line);
        debug!(?input, "Input parsed");

        match input {
            Input::Quit => break,
            Input::New => controller.new_game(),
            Input::Help => print_help(),
            Input::Difficulty(d) => {
                controller.configure_difficulty(d);
                println!("Difficulty set to {}", d);
            }
            Input::Move(row, col) => {
                if let Err(e) = controller.submit_move(row, col) {
                    println!("{}", e);
                }
            }
            Input::Unknown => println!("Unrecognized input: {:?}", line.trim()),
        }
    }

    Ok(())
}

#[instrument(skip(board_path))]
fn run_search(
    depth: u8,
    side: Player,
    board_path: Option<&std::path::Path>,
    json: bool,
) -> Result<()> {
    let mut board = match board_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board from {}", path.display()))?
            .parse::<Board>()?,
        None => Board::new(),
    };

    let mut searcher = Searcher::new();
    let result = searcher.search(&mut board, depth, side == Player::Light, -INF, INF);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", board);
        match result.best_move {
            Some(pos) => println!("{} plays {}", side, pos),
            None => println!("{} has no move", side),
        }
        println!("value {} ({} nodes at depth {})", result.value, result.nodes, depth);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_filter_replaces_startup_filter() {
        let (filter, handle) = reload::Layer::new(EnvFilter::new(STARTUP_FILTER));
        let subscriber = tracing_subscriber::registry().with(filter);
        let _guard = tracing::subscriber::set_default(subscriber);

        let settings: Settings = toml::from_str("log_filter = \"debug\"").unwrap();
        apply_log_filter(Some(&handle), &settings).unwrap();
        assert_eq!(handle.with_current(|f| f.to_string()).unwrap(), "debug");

        apply_log_filter(None, &Settings::default()).unwrap();
        assert_eq!(handle.with_current(|f| f.to_string()).unwrap(), "debug");
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_input("2 3"), Input::Move(2, 3));
        assert_eq!(parse_input(" 4,5 "), Input::Move(4, 5));
        assert_eq!(parse_input("x y"), Input::Unknown);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("new"), Input::New);
        assert_eq!(
            parse_input("difficulty strong"),
            Input::Difficulty(Difficulty::Strong)
        );
        assert_eq!(parse_input("d easy"), Input::Unknown);
    }
}
