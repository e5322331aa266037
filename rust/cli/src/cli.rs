//! clap derive definitions for the rochambot CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rochambot",
    version,
    about = "Rock-paper-scissors against the house, one tick per input line"
)]
pub struct RochambotCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a match; each stdin line is one tick (finger flags, '-' for no
    /// hand, 'r' to reset, 'q' to quit)
    Play {
        /// RNG seed for the AI's throws (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Virtual time advanced per input line, in milliseconds
        #[arg(long, default_value_t = 30)]
        tick_ms: u64,
        /// Countdown duration override, in milliseconds
        #[arg(long)]
        countdown_ms: Option<u64>,
        /// Reveal duration override, in milliseconds
        #[arg(long)]
        reveal_ms: Option<u64>,
        /// Score needed to win the match
        #[arg(long)]
        threshold: Option<u32>,
        /// External command used to play cue sounds (e.g. "aplay")
        #[arg(long)]
        sound: Option<String>,
        /// Directory containing the cue sound assets
        #[arg(long, default_value = "assets")]
        assets: PathBuf,
        /// Emit one JSON snapshot per tick instead of text rendering
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Simulate rounds headlessly with a scripted player and print a summary
    Sim {
        /// Maximum number of rounds to play
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        /// RNG seed for both the AI and the scripted player (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Score needed to win the match
        #[arg(long)]
        threshold: Option<u32>,
    },
    /// Classify one finger-flag string and print the resulting move
    Classify {
        /// Five 0/1 flags ordered thumb,index,middle,ring,pinky (e.g. 01100)
        #[arg(long)]
        fingers: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
