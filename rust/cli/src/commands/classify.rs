//! # Classify Command
//!
//! One-shot gesture inspection: classify a finger-flag string from the
//! command line and print the resulting move.

use std::io::Write;

use rochambot_engine::gesture::classify;

use crate::error::CliError;
use crate::formatters::format_move;
use crate::ui;
use crate::validation::parse_finger_flags;

pub fn handle_classify_command(
    fingers: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let flags = match parse_finger_flags(fingers) {
        Ok(flags) => flags,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e);
        }
    };
    let mv = classify(flags);
    writeln!(out, "fingers={} move={}", fingers, format_move(&mv))?;
    Ok(())
}
