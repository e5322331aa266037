use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::moves::{MatchWinner, Move, RoundOutcome};
use crate::opponent::Opponent;
use crate::rules::round_outcome;

/// Default countdown shown before each reveal.
pub const DEFAULT_COUNTDOWN: Duration = Duration::from_secs(2);
/// Default time the AI move and outcome stay on screen.
pub const DEFAULT_REVEAL: Duration = Duration::from_secs(1);
/// Default score a side must reach to win the match.
pub const DEFAULT_WIN_THRESHOLD: u32 = 10;

/// The stage the current round is in. Exactly one phase is active at a time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Counting down before the reveal; the player's gesture is sampled
    /// continuously and the value in effect at expiry is used
    Countdown,
    /// AI move and round outcome are visible
    Reveal,
    /// A side reached the win threshold; terminal until an explicit reset
    GameOver,
}

/// Symbolic request to play one audio asset category this tick.
/// Decoupled from actual playback; the audio collaborator maps each cue to
/// an asset and plays it asynchronously.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cue {
    RoundWin,
    RoundLose,
    Draw,
    GameWin,
    GameLose,
}

impl Cue {
    /// The cue that applies while a round outcome is on screen.
    /// Unknown outcomes are silent.
    fn for_outcome(outcome: RoundOutcome) -> Option<Cue> {
        match outcome {
            RoundOutcome::Win => Some(Cue::RoundWin),
            RoundOutcome::Lose => Some(Cue::RoundLose),
            RoundOutcome::Draw => Some(Cue::Draw),
            RoundOutcome::Unknown => None,
        }
    }
}

/// Timing and scoring configuration for a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// How long the countdown phase lasts
    pub countdown: Duration,
    /// How long the reveal phase lasts
    pub reveal: Duration,
    /// Score a side must reach to win the match
    pub win_threshold: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            countdown: DEFAULT_COUNTDOWN,
            reveal: DEFAULT_REVEAL,
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}

impl RoundConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.countdown.is_zero() {
            return Err(EngineError::InvalidDuration { field: "countdown" });
        }
        if self.reveal.is_zero() {
            return Err(EngineError::InvalidDuration { field: "reveal" });
        }
        if self.win_threshold == 0 {
            return Err(EngineError::InvalidThreshold {
                value: self.win_threshold,
            });
        }
        Ok(())
    }
}

/// Read-only copy of the match state relevant to presentation, produced once
/// per tick by [`RoundEngine::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: RoundPhase,
    pub player_score: u32,
    pub ai_score: u32,
    /// The player's move frozen at the instant the countdown expired;
    /// meaningful only in Reveal and GameOver
    pub last_player_move: Move,
    /// The AI's throw for the current round; `NoHand` outside Reveal/GameOver
    pub ai_move: Move,
    /// Outcome of the current round; cleared when a new countdown starts
    pub outcome: Option<RoundOutcome>,
    /// Set only once the match is over
    pub final_winner: Option<MatchWinner>,
    /// Time left in the current phase (zero in GameOver)
    pub remaining: Duration,
}

/// What one tick of the engine produced: the presentation snapshot plus the
/// audio cue (if any) that applies this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutput {
    pub snapshot: Snapshot,
    pub cue: Option<Cue>,
}

/// The match state machine. Owns all mutable game state exclusively and is
/// driven by one [`advance`](RoundEngine::advance) call per captured frame or
/// timer tick.
///
/// `advance` and `reset` take `&mut self`, so a single-owner driver loop gets
/// atomicity for free; if multiple threads need access, wrap the engine in a
/// mutex so resets interleave atomically with ticks.
pub struct RoundEngine {
    config: RoundConfig,
    opponent: Box<dyn Opponent>,
    phase: RoundPhase,
    player_score: u32,
    ai_score: u32,
    /// Latest gesture observed during the current countdown
    candidate_move: Move,
    last_player_move: Move,
    ai_move: Move,
    outcome: Option<RoundOutcome>,
    final_winner: Option<MatchWinner>,
    phase_entered_at: Instant,
}

impl RoundEngine {
    /// Creates an engine in the initial Countdown phase with zero scores.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the configuration has a zero duration or a
    /// zero win threshold.
    pub fn new(
        config: RoundConfig,
        opponent: Box<dyn Opponent>,
        now: Instant,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            opponent,
            phase: RoundPhase::Countdown,
            player_score: 0,
            ai_score: 0,
            candidate_move: Move::NoHand,
            last_player_move: Move::NoHand,
            ai_move: Move::NoHand,
            outcome: None,
            final_winner: None,
            phase_entered_at: now,
        })
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    pub fn player_score(&self) -> u32 {
        self.player_score
    }
    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }
    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// Advances the state machine by one tick.
    ///
    /// `sampled` is the gesture classified from this tick's frame (`NoHand`
    /// when nothing was detected) and `now` is the current monotonic time,
    /// which must not decrease across calls. Never fails; every call leaves
    /// the engine in a valid phase.
    ///
    /// The returned cue follows the phase: the round outcome's cue on every
    /// tick spent in Reveal (including the tick that enters it), the
    /// game-win or game-lose cue on the tick that enters GameOver, and
    /// nothing otherwise. Callers that dispatch audio are responsible for
    /// not replaying a cue on every frame.
    pub fn advance(&mut self, sampled: Move, now: Instant) -> TickOutput {
        let cue = match self.phase {
            RoundPhase::Countdown => {
                self.candidate_move = sampled;
                if now.duration_since(self.phase_entered_at) >= self.config.countdown {
                    self.enter_reveal(now)
                } else {
                    None
                }
            }
            RoundPhase::Reveal => {
                if now.duration_since(self.phase_entered_at) >= self.config.reveal {
                    self.finish_reveal(now)
                } else {
                    self.outcome.and_then(Cue::for_outcome)
                }
            }
            RoundPhase::GameOver => None,
        };
        TickOutput {
            snapshot: self.snapshot(now),
            cue,
        }
    }

    /// Countdown expired: freeze the player's move, draw the AI's throw,
    /// score the round, and enter Reveal.
    fn enter_reveal(&mut self, now: Instant) -> Option<Cue> {
        self.last_player_move = self.candidate_move;
        self.ai_move = self.opponent.throw();
        let outcome = round_outcome(self.last_player_move, self.ai_move);
        match outcome {
            RoundOutcome::Win => self.player_score += 1,
            RoundOutcome::Lose => self.ai_score += 1,
            RoundOutcome::Draw | RoundOutcome::Unknown => {}
        }
        self.outcome = Some(outcome);
        self.phase = RoundPhase::Reveal;
        self.phase_entered_at = now;
        Cue::for_outcome(outcome)
    }

    /// Reveal expired: end the match if a side reached the threshold,
    /// otherwise start the next countdown.
    fn finish_reveal(&mut self, now: Instant) -> Option<Cue> {
        if self.player_score >= self.config.win_threshold {
            self.final_winner = Some(MatchWinner::Player);
            self.phase = RoundPhase::GameOver;
            self.phase_entered_at = now;
            Some(Cue::GameWin)
        } else if self.ai_score >= self.config.win_threshold {
            self.final_winner = Some(MatchWinner::Ai);
            self.phase = RoundPhase::GameOver;
            self.phase_entered_at = now;
            Some(Cue::GameLose)
        } else {
            self.phase = RoundPhase::Countdown;
            self.phase_entered_at = now;
            self.candidate_move = Move::NoHand;
            self.ai_move = Move::NoHand;
            self.outcome = None;
            None
        }
    }

    /// Reinitializes the match to the same state as a freshly constructed
    /// engine: zero scores, Countdown phase, all derived fields cleared.
    pub fn reset(&mut self, now: Instant) {
        self.phase = RoundPhase::Countdown;
        self.player_score = 0;
        self.ai_score = 0;
        self.candidate_move = Move::NoHand;
        self.last_player_move = Move::NoHand;
        self.ai_move = Move::NoHand;
        self.outcome = None;
        self.final_winner = None;
        self.phase_entered_at = now;
    }

    /// Read-only copy of the presentation-relevant state as of `now`.
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let remaining = match self.phase {
            RoundPhase::Countdown => self
                .config
                .countdown
                .saturating_sub(now.duration_since(self.phase_entered_at)),
            RoundPhase::Reveal => self
                .config
                .reveal
                .saturating_sub(now.duration_since(self.phase_entered_at)),
            RoundPhase::GameOver => Duration::ZERO,
        };
        Snapshot {
            phase: self.phase,
            player_score: self.player_score,
            ai_score: self.ai_score,
            last_player_move: self.last_player_move,
            ai_move: self.ai_move,
            outcome: self.outcome,
            final_winner: self.final_winner,
            remaining,
        }
    }
}
