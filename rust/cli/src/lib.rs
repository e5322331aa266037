//! # Rochambot CLI Library
//!
//! Command-line interface for the rochambot rock-paper-scissors engine.
//! The binary stands in for the camera-driven front end: stdin lines play
//! the role of classified frames, and the round engine, AI opponent, and
//! audio cue dispatch are wired together exactly as the windowed game
//! would wire them.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["rochambot", "sim", "--rounds", "10", "--seed", "42"];
//! let code = rochambot_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Drive an interactive match, one tick per stdin line
//! - `sim`: Run headless seeded self-play and print a summary
//! - `classify`: Classify a single finger-flag string
//! - `cfg`: Display the resolved configuration settings

use clap::Parser;
use std::io::Write;

pub mod audio;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, RochambotCli};

use commands::{
    handle_cfg_command, handle_classify_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["rochambot", "classify", "--fingers", "01100"];
/// let code = rochambot_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "classify", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = RochambotCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Rochambot CLI");
                    write_or_exit!(err, "Usage: rochambot <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: rochambot --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                seed,
                tick_ms,
                countdown_ms,
                reveal_ms,
                threshold,
                sound,
                assets,
                json,
            } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                finish(
                    handle_play_command(
                        seed,
                        tick_ms,
                        countdown_ms,
                        reveal_ms,
                        threshold,
                        sound,
                        assets,
                        json,
                        out,
                        err,
                        &mut stdin_lock,
                    ),
                    err,
                )
            }
            Commands::Sim {
                rounds,
                seed,
                threshold,
            } => finish(handle_sim_command(rounds, seed, threshold, out, err), err),
            Commands::Classify { fingers } => {
                finish(handle_classify_command(&fingers, out, err), err)
            }
            Commands::Cfg => finish(handle_cfg_command(out, err), err),
        },
    }
}

/// Maps a handler result to an exit code, reporting the error on the way.
fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
