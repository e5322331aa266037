//! Move, outcome, and score formatters for terminal display.
//!
//! Pure functions turning engine value types into the display labels the
//! game uses on screen (ROCK, PAPER, SCISSOR, WIN, YOU WIN!, ...).

use rochambot_engine::moves::{MatchWinner, Move, RoundOutcome};
use rochambot_engine::round::{Cue, RoundPhase};

pub fn format_move(m: &Move) -> &'static str {
    match m {
        Move::Rock => "ROCK",
        Move::Paper => "PAPER",
        Move::Scissor => "SCISSOR",
        Move::Unknown => "UNKNOWN",
        Move::NoHand => "NONE",
    }
}

pub fn format_outcome(outcome: &RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "WIN",
        RoundOutcome::Lose => "LOSE",
        RoundOutcome::Draw => "DRAW",
        RoundOutcome::Unknown => "UNKNOWN",
    }
}

pub fn format_phase(phase: &RoundPhase) -> &'static str {
    match phase {
        RoundPhase::Countdown => "COUNTDOWN",
        RoundPhase::Reveal => "REVEAL",
        RoundPhase::GameOver => "GAME_OVER",
    }
}

pub fn format_cue(cue: &Cue) -> &'static str {
    match cue {
        Cue::RoundWin => "ROUND_WIN",
        Cue::RoundLose => "ROUND_LOSE",
        Cue::Draw => "DRAW",
        Cue::GameWin => "GAME_WIN",
        Cue::GameLose => "GAME_LOSE",
    }
}

pub fn format_score_line(player_score: u32, ai_score: u32) -> String {
    format!("Score: You {} - {} AI", player_score, ai_score)
}

pub fn format_winner(winner: &MatchWinner) -> &'static str {
    match winner {
        MatchWinner::Player => "PLAYER",
        MatchWinner::Ai => "AI",
    }
}

pub fn format_winner_banner(winner: &MatchWinner) -> &'static str {
    match winner {
        MatchWinner::Player => "YOU WIN!",
        MatchWinner::Ai => "YOU LOSE!",
    }
}
