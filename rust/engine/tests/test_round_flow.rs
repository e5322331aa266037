use std::time::{Duration, Instant};

use rochambot_engine::moves::{MatchWinner, Move, RoundOutcome};
use rochambot_engine::opponent::Opponent;
use rochambot_engine::round::{Cue, RoundConfig, RoundEngine, RoundPhase};

/// Opponent that reveals a fixed scripted sequence of throws.
struct Scripted {
    throws: Vec<Move>,
    next: usize,
}

impl Scripted {
    fn new(throws: &[Move]) -> Self {
        Self {
            throws: throws.to_vec(),
            next: 0,
        }
    }
}

impl Opponent for Scripted {
    fn throw(&mut self) -> Move {
        let m = self.throws[self.next % self.throws.len()];
        self.next += 1;
        m
    }
    fn name(&self) -> &str {
        "scripted"
    }
}

fn engine_vs(throws: &[Move], start: Instant) -> RoundEngine {
    RoundEngine::new(RoundConfig::default(), Box::new(Scripted::new(throws)), start)
        .expect("default config is valid")
}

#[test]
fn countdown_holds_until_duration_elapses() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Rock], t0);

    let tick = eng.advance(Move::Paper, t0 + Duration::from_millis(500));
    assert_eq!(tick.snapshot.phase, RoundPhase::Countdown);
    assert_eq!(tick.snapshot.outcome, None);
    assert_eq!(tick.cue, None);
    assert_eq!(tick.snapshot.remaining, Duration::from_millis(1500));

    let tick = eng.advance(Move::Paper, t0 + Duration::from_millis(1999));
    assert_eq!(tick.snapshot.phase, RoundPhase::Countdown);
}

#[test]
fn fist_beats_scissor_and_scores_for_the_player() {
    // Scenario: all-folded fingers held through the countdown, AI draws scissor
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Scissor], t0);

    eng.advance(Move::Rock, t0 + Duration::from_millis(100));
    let tick = eng.advance(Move::Rock, t0 + Duration::from_secs(2));
    assert_eq!(tick.snapshot.phase, RoundPhase::Reveal);
    assert_eq!(tick.snapshot.last_player_move, Move::Rock);
    assert_eq!(tick.snapshot.ai_move, Move::Scissor);
    assert_eq!(tick.snapshot.outcome, Some(RoundOutcome::Win));
    assert_eq!(tick.snapshot.player_score, 1);
    assert_eq!(tick.snapshot.ai_score, 0);
    assert_eq!(tick.cue, Some(Cue::RoundWin));
}

#[test]
fn paper_loses_to_scissor_and_scores_for_the_ai() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Scissor], t0);

    let tick = eng.advance(Move::Paper, t0 + Duration::from_secs(2));
    assert_eq!(tick.snapshot.outcome, Some(RoundOutcome::Lose));
    assert_eq!(tick.snapshot.ai_score, 1);
    assert_eq!(tick.snapshot.player_score, 0);
    assert_eq!(tick.cue, Some(Cue::RoundLose));
}

#[test]
fn no_hand_for_the_whole_countdown_scores_nothing() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Rock], t0);

    for ms in (0..2000).step_by(100) {
        eng.advance(Move::NoHand, t0 + Duration::from_millis(ms));
    }
    let tick = eng.advance(Move::NoHand, t0 + Duration::from_secs(2));
    assert_eq!(tick.snapshot.phase, RoundPhase::Reveal);
    assert_eq!(tick.snapshot.outcome, Some(RoundOutcome::Unknown));
    assert_eq!(tick.snapshot.player_score, 0);
    assert_eq!(tick.snapshot.ai_score, 0);
    // unknown rounds are silent
    assert_eq!(tick.cue, None);
}

#[test]
fn gesture_in_effect_at_expiry_wins_over_earlier_samples() {
    // the move is resampled continuously; no debounce
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Rock], t0);

    eng.advance(Move::Scissor, t0 + Duration::from_millis(500));
    eng.advance(Move::Scissor, t0 + Duration::from_millis(1000));
    let tick = eng.advance(Move::Paper, t0 + Duration::from_secs(2));
    assert_eq!(tick.snapshot.last_player_move, Move::Paper);
    assert_eq!(tick.snapshot.outcome, Some(RoundOutcome::Win));
}

#[test]
fn reveal_emits_the_outcome_cue_every_tick_until_expiry() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Scissor], t0);

    let entry = eng.advance(Move::Rock, t0 + Duration::from_secs(2));
    assert_eq!(entry.cue, Some(Cue::RoundWin));

    let mid = eng.advance(Move::NoHand, t0 + Duration::from_millis(2500));
    assert_eq!(mid.snapshot.phase, RoundPhase::Reveal);
    assert_eq!(mid.cue, Some(Cue::RoundWin));
    assert_eq!(mid.snapshot.remaining, Duration::from_millis(500));

    // gestures shown during reveal do not disturb the frozen move
    assert_eq!(mid.snapshot.last_player_move, Move::Rock);
}

#[test]
fn reveal_expiry_starts_a_fresh_countdown_below_threshold() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Scissor], t0);

    eng.advance(Move::Rock, t0 + Duration::from_secs(2));
    let tick = eng.advance(Move::NoHand, t0 + Duration::from_secs(3));
    assert_eq!(tick.snapshot.phase, RoundPhase::Countdown);
    assert_eq!(tick.snapshot.ai_move, Move::NoHand);
    assert_eq!(tick.snapshot.outcome, None);
    assert_eq!(tick.cue, None);
    // score carries over between rounds
    assert_eq!(tick.snapshot.player_score, 1);
    assert_eq!(tick.snapshot.remaining, Duration::from_secs(2));
}

#[test]
fn phases_are_never_skipped_under_any_tick_cadence() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Rock, Move::Paper, Move::Scissor], t0);

    let mut prev = RoundPhase::Countdown;
    // sparse, uneven cadence: ticks can land well past a phase boundary
    for ms in [700u64, 2100, 2300, 3600, 4100, 6000, 6900, 9000, 9500] {
        let tick = eng.advance(Move::Rock, t0 + Duration::from_millis(ms));
        let phase = tick.snapshot.phase;
        let legal = match prev {
            RoundPhase::Countdown => {
                matches!(phase, RoundPhase::Countdown | RoundPhase::Reveal)
            }
            RoundPhase::Reveal => true,
            RoundPhase::GameOver => phase == RoundPhase::GameOver,
        };
        assert!(legal, "illegal transition {:?} -> {:?} at {}ms", prev, phase, ms);
        assert!(tick.snapshot.final_winner.is_none() || phase == RoundPhase::GameOver);
        prev = phase;
    }
}

#[test]
fn scores_never_decrease_and_stay_below_threshold_before_game_over() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Scissor, Move::Paper, Move::Rock], t0);
    let threshold = eng.config().win_threshold;

    let mut last = (0u32, 0u32);
    for step in 1..200u64 {
        let tick = eng.advance(Move::Rock, t0 + Duration::from_millis(step * 250));
        let scores = (tick.snapshot.player_score, tick.snapshot.ai_score);
        assert!(scores.0 >= last.0 && scores.1 >= last.1);
        if tick.snapshot.phase != RoundPhase::GameOver {
            assert!(scores.0 < threshold && scores.1 < threshold);
        }
        last = scores;
    }
}

#[test]
fn invalid_configs_are_rejected() {
    let t0 = Instant::now();
    let zero_countdown = RoundConfig {
        countdown: Duration::ZERO,
        ..RoundConfig::default()
    };
    assert!(RoundEngine::new(zero_countdown, Box::new(Scripted::new(&[Move::Rock])), t0).is_err());

    let zero_threshold = RoundConfig {
        win_threshold: 0,
        ..RoundConfig::default()
    };
    assert!(RoundEngine::new(zero_threshold, Box::new(Scripted::new(&[Move::Rock])), t0).is_err());
}

#[test]
fn snapshot_serializes_for_presentation_consumers() {
    let t0 = Instant::now();
    let mut eng = engine_vs(&[Move::Scissor], t0);
    let tick = eng.advance(Move::Rock, t0 + Duration::from_secs(2));

    let json = serde_json::to_string(&tick.snapshot).expect("snapshot serializes");
    assert!(json.contains("\"phase\":\"Reveal\""));
    assert!(json.contains("\"outcome\":\"Win\""));
    let _winner: Option<MatchWinner> = tick.snapshot.final_winner;
}
