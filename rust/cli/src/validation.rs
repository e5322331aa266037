//! Parsing of per-tick user input.
//!
//! Each stdin line is one tick: a finger-flag string, a no-hand marker, or
//! one of the keyboard commands from the original game ('r' to reset, 'q'
//! to quit). Anything unrecognized is normalized to no-hand by the driver
//! rather than treated as an error.

use crate::error::CliError;
use rochambot_engine::gesture::FINGER_COUNT;

/// What one stdin line asks the driver to do this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickCommand {
    /// Five finger-extension flags were supplied
    Gesture([bool; FINGER_COUNT]),
    /// No hand in front of the camera this tick
    NoHand,
    /// Reset the match
    Reset,
    /// End the session
    Quit,
    /// Unrecognized input; the driver warns and treats it as no hand
    Invalid(String),
}

pub fn parse_tick_line(line: &str) -> TickCommand {
    let s = line.trim();
    match s {
        "" | "-" => TickCommand::NoHand,
        "q" | "quit" => TickCommand::Quit,
        "r" | "reset" => TickCommand::Reset,
        _ => match parse_finger_flags(s) {
            Ok(flags) => TickCommand::Gesture(flags),
            Err(_) => TickCommand::Invalid(s.to_string()),
        },
    }
}

/// Parses a finger-flag string of exactly five '0'/'1' characters ordered
/// thumb, index, middle, ring, pinky (e.g. "01100" for scissor).
pub fn parse_finger_flags(s: &str) -> Result<[bool; FINGER_COUNT], CliError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != FINGER_COUNT {
        return Err(CliError::InvalidInput(format!(
            "expected {} finger flags, got {}",
            FINGER_COUNT,
            chars.len()
        )));
    }
    let mut flags = [false; FINGER_COUNT];
    for (i, c) in chars.iter().enumerate() {
        flags[i] = match c {
            '0' => false,
            '1' => true,
            other => {
                return Err(CliError::InvalidInput(format!(
                    "finger flag must be 0 or 1, got '{}'",
                    other
                )));
            }
        };
    }
    Ok(flags)
}
