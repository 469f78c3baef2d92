//! # Arcana CLI Library
//!
//! Command-line interface for the Arcana tarot engine: shuffle a deck, draw
//! cards, look cards up and lay readings into spreads.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["arcana", "read", "--spread", "celtic-cross", "--question", "work"];
//! let code = arcana_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `read`: Lay a reading into a spread and print its interpretation
//! - `draw`: Draw loose cards from a shuffled deck
//! - `card`: Look up a single card
//! - `deck`: List the deck in canonical order
//! - `spreads`: Describe the bundled spreads
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{ArcanaCli, Commands};

use commands::{
    handle_card_command, handle_cfg_command, handle_deck_command, handle_draw_command,
    handle_read_command, handle_spreads_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["arcana", "draw", "--count", "3", "--seed", "42"];
/// let code = arcana_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["read", "draw", "card", "deck", "spreads", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ArcanaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Arcana Tarot CLI").is_err()
                        || writeln!(err, "Usage: arcana <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: arcana --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Read {
            spread,
            question,
            json,
            session,
        } => handle_read_command(&spread, question, json, &session, out, err),
        Commands::Draw {
            count,
            json,
            session,
        } => handle_draw_command(count, json, &session, out),
        Commands::Card {
            major,
            suit,
            rank,
            data_dir,
        } => handle_card_command(major, suit, rank, data_dir, out),
        Commands::Deck {
            arcana,
            suit,
            data_dir,
        } => handle_deck_command(arcana, suit, data_dir, out),
        Commands::Spreads { json } => handle_spreads_command(json, out),
        Commands::Cfg => {
            // cfg reports its own failure
            return match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(_) => exit_code::ERROR,
            };
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
