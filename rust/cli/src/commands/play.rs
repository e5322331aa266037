//! # Play Command
//!
//! The driver loop for an interactive match. The camera is stood in for by
//! stdin: each line is one tick carrying the finger flags detected that
//! frame ('-' or an empty line for no hand), or one of the keyboard
//! commands 'r' (reset) and 'q' (quit). Time advances on a fixed virtual
//! timestep per line, so piped sessions are deterministic.
//!
//! Per tick the handler classifies the gesture, advances the round engine,
//! renders phase changes, and dispatches the cue (once per phase edge) to
//! the audio sink.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};

use rochambot_ai::create_ai;
use rochambot_engine::gesture::classify;
use rochambot_engine::moves::Move;
use rochambot_engine::round::{RoundEngine, RoundPhase, Snapshot};

use crate::audio::{CommandSink, CueSink, NullSink};
use crate::config;
use crate::error::CliError;
use crate::formatters::{
    format_move, format_outcome, format_score_line, format_winner, format_winner_banner,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_tick_line, TickCommand};

/// Handle the play command: drive one interactive match.
///
/// Command-line overrides win over the resolved configuration; the seed
/// falls back to the config file, then to a random draw.
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    seed: Option<u64>,
    tick_ms: u64,
    countdown_ms: Option<u64>,
    reveal_ms: Option<u64>,
    threshold: Option<u32>,
    sound: Option<String>,
    assets: PathBuf,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if tick_ms == 0 {
        ui::write_error(err, "tick-ms must be >= 1")?;
        return Err(CliError::InvalidInput("tick-ms must be >= 1".to_string()));
    }

    let base = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    let mut cfg = base.clone();
    if let Some(ms) = countdown_ms {
        cfg.countdown_ms = ms;
    }
    if let Some(ms) = reveal_ms {
        cfg.reveal_ms = ms;
    }
    if let Some(t) = threshold {
        cfg.win_threshold = t;
    }
    let seed = seed.or(base.seed).unwrap_or_else(rand::random);
    let sound = sound.or(base.sound);

    let sink: Box<dyn CueSink> = match sound {
        Some(player) => Box::new(CommandSink::new(player, assets)),
        None => Box::new(NullSink),
    };

    let start = Instant::now();
    let mut engine = match RoundEngine::new(cfg.to_round_config(), create_ai("uniform", Some(seed)), start)
    {
        Ok(engine) => engine,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    writeln!(
        out,
        "play: seed={} tick_ms={} threshold={}",
        seed, tick_ms, cfg.win_threshold
    )?;

    let tick = Duration::from_millis(tick_ms);
    let mut now = start;
    let mut prev_phase = RoundPhase::Countdown;
    let mut shown_secs = None;

    while let Some(line) = read_stdin_line(stdin) {
        now += tick;
        let sampled = match parse_tick_line(&line) {
            TickCommand::Quit => break,
            TickCommand::Reset => {
                engine.reset(now);
                prev_phase = RoundPhase::Countdown;
                shown_secs = None;
                writeln!(out, "Match reset.")?;
                continue;
            }
            TickCommand::Gesture(flags) => classify(flags),
            TickCommand::NoHand => Move::NoHand,
            TickCommand::Invalid(input) => {
                ui::display_warning(
                    err,
                    &format!("unrecognized input '{}', treating as no hand", input),
                )?;
                Move::NoHand
            }
        };

        let output = engine.advance(sampled, now);
        let snap = &output.snapshot;
        let entered_new_phase = snap.phase != prev_phase;

        if json {
            let line = serde_json::to_string(snap).map_err(|e| CliError::Engine(e.to_string()))?;
            writeln!(out, "{}", line)?;
        } else {
            render(snap, entered_new_phase, &mut shown_secs, out)?;
        }

        // one playback per phase edge; the engine repeats the cue each
        // reveal tick and leaves deduplication to us
        if entered_new_phase
            && let Some(cue) = output.cue
        {
            sink.play(cue);
        }
        prev_phase = snap.phase;
    }

    writeln!(out, "Final score: You {} - {} AI", engine.player_score(), engine.ai_score())?;
    match engine.snapshot(now).final_winner {
        Some(winner) => writeln!(out, "Match winner: {}", format_winner(&winner))?,
        None => writeln!(out, "Match winner: none")?,
    }
    writeln!(
        out,
        "Session ended at {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    Ok(())
}

/// Text rendering: countdown seconds as they tick down, the reveal line
/// when a round resolves, and the banner when the match ends.
fn render(
    snap: &Snapshot,
    entered_new_phase: bool,
    shown_secs: &mut Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match snap.phase {
        RoundPhase::Countdown => {
            let secs = (snap.remaining.as_millis() as u64).div_ceil(1_000);
            if *shown_secs != Some(secs) {
                writeln!(out, "Countdown: {}", secs)?;
                *shown_secs = Some(secs);
            }
        }
        RoundPhase::Reveal => {
            if entered_new_phase {
                *shown_secs = None;
                if let Some(outcome) = snap.outcome {
                    writeln!(
                        out,
                        "You: {}  AI: {} -> {}",
                        format_move(&snap.last_player_move),
                        format_move(&snap.ai_move),
                        format_outcome(&outcome)
                    )?;
                    writeln!(out, "{}", format_score_line(snap.player_score, snap.ai_score))?;
                }
            }
        }
        RoundPhase::GameOver => {
            if entered_new_phase {
                writeln!(out, "GAME OVER")?;
                if let Some(winner) = snap.final_winner {
                    writeln!(out, "{}", format_winner_banner(&winner))?;
                }
            }
        }
    }
    Ok(())
}
