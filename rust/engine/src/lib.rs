//! # rochambot-engine: Rock-Paper-Scissors Decision Core
//!
//! The decision core of a camera-driven Rock-Paper-Scissors game. It turns a
//! classified player gesture into a round outcome, drives the timed
//! countdown/reveal sequence, accumulates score, and decides the match
//! winner. Everything around it (capture, rendering, audio playback) is a
//! thin adapter over the snapshot and cue values this crate produces.
//!
//! ## Core Modules
//!
//! - [`moves`] - Move, outcome, and winner value types
//! - [`gesture`] - Finger-flag classification into a [`moves::Move`]
//! - [`rules`] - The beats-relation and round outcome computation
//! - [`opponent`] - Seam for the house move revealed each round
//! - [`round`] - The round state machine ([`round::RoundEngine`])
//! - [`errors`] - Error types for engine configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use rochambot_engine::gesture::classify;
//! use rochambot_engine::moves::Move;
//! use rochambot_engine::opponent::Opponent;
//! use rochambot_engine::round::{RoundConfig, RoundEngine, RoundPhase};
//!
//! struct AlwaysRock;
//! impl Opponent for AlwaysRock {
//!     fn throw(&mut self) -> Move {
//!         Move::Rock
//!     }
//!     fn name(&self) -> &str {
//!         "always-rock"
//!     }
//! }
//!
//! let start = Instant::now();
//! let mut engine =
//!     RoundEngine::new(RoundConfig::default(), Box::new(AlwaysRock), start).unwrap();
//!
//! // One tick per captured frame: classify the gesture, advance the clock.
//! let sampled = classify([true, true, true, true, true]); // PAPER
//! let tick = engine.advance(sampled, start + Duration::from_millis(33));
//! assert_eq!(tick.snapshot.phase, RoundPhase::Countdown);
//! ```
//!
//! ## Tick Contract
//!
//! [`round::RoundEngine::advance`] is the single mutation entry point. It is
//! total: it never fails, and every call leaves the engine in one of the
//! three valid phases. Drivers call it once per frame or timer tick with a
//! monotonically increasing `now` and read the returned snapshot and cue.

pub mod errors;
pub mod gesture;
pub mod moves;
pub mod opponent;
pub mod round;
pub mod rules;
