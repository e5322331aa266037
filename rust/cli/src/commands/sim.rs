//! # Sim Command
//!
//! Headless self-play: a scripted player holds one random throw per
//! countdown (fed through the classifier as canonical finger flags) against
//! the uniform AI, for up to N rounds or until the match ends. The summary
//! is deterministic for a given seed.

use std::io::Write;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rochambot_ai::create_ai;
use rochambot_engine::gesture::{classify, FINGER_COUNT};
use rochambot_engine::moves::{all_throws, Move, RoundOutcome};
use rochambot_engine::round::{RoundConfig, RoundEngine, RoundPhase};

use crate::error::CliError;
use crate::formatters::format_winner;
use crate::ui;

/// The finger flags a well-behaved player would show for each throw.
fn canonical_flags(throw: Move) -> [bool; FINGER_COUNT] {
    match throw {
        Move::Paper => [true; FINGER_COUNT],
        Move::Scissor => [false, true, true, false, false],
        _ => [false; FINGER_COUNT],
    }
}

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    threshold: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut round_cfg = RoundConfig::default();
    if let Some(t) = threshold {
        round_cfg.win_threshold = t;
    }

    let start = Instant::now();
    let mut engine = match RoundEngine::new(round_cfg.clone(), create_ai("uniform", Some(seed)), start) {
        Ok(engine) => engine,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };
    // separate stream for the player's hand so it never mirrors the AI
    let mut hand_rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5EED_CAFE);

    writeln!(out, "sim: rounds={} seed={}", rounds, seed)?;

    let mut now = start;
    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);
    let mut played = 0u32;

    for _ in 0..rounds {
        let throws = all_throws();
        let player = throws[hand_rng.random_range(0..throws.len())];

        now += round_cfg.countdown;
        let reveal = engine.advance(classify(canonical_flags(player)), now);
        match reveal.snapshot.outcome {
            Some(RoundOutcome::Win) => wins += 1,
            Some(RoundOutcome::Lose) => losses += 1,
            Some(RoundOutcome::Draw) => draws += 1,
            Some(RoundOutcome::Unknown) | None => {}
        }
        played += 1;

        now += round_cfg.reveal;
        let tick = engine.advance(Move::NoHand, now);
        if tick.snapshot.phase == RoundPhase::GameOver {
            break;
        }
    }

    writeln!(out, "Rounds played: {}", played)?;
    writeln!(out, "Player wins: {}  AI wins: {}  Draws: {}", wins, losses, draws)?;
    writeln!(
        out,
        "Final score: You {} - {} AI",
        engine.player_score(),
        engine.ai_score()
    )?;
    match engine.snapshot(now).final_winner {
        Some(winner) => writeln!(out, "Match winner: {}", format_winner(&winner))?,
        None => writeln!(out, "Match winner: none (round budget exhausted)")?,
    }
    Ok(())
}
