//! # Cfg Command
//!
//! Prints the resolved configuration as JSON, annotating each key with the
//! source its value came from (default, file, or env).

use std::io::Write;

use serde_json::json;

use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    let doc = json!({
        "countdown_ms": { "value": cfg.countdown_ms, "source": sources.countdown_ms },
        "reveal_ms": { "value": cfg.reveal_ms, "source": sources.reveal_ms },
        "win_threshold": { "value": cfg.win_threshold, "source": sources.win_threshold },
        "seed": { "value": cfg.seed, "source": sources.seed },
        "sound": { "value": cfg.sound, "source": sources.sound },
    });
    let rendered =
        serde_json::to_string_pretty(&doc).map_err(|e| CliError::Config(e.to_string()))?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
