//! # rochambot-ai: AI Opponent for Rock-Paper-Scissors
//!
//! Implementations of the engine's [`Opponent`] seam: the house side that
//! reveals a throw at the end of every countdown.
//!
//! ## Core Components
//!
//! - [`uniform`] - Uniform random thrower with reproducible seeding
//! - [`create_ai`] - Factory function for creating opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use rochambot_ai::create_ai;
//!
//! // Same seed, same sequence of throws
//! let mut a = create_ai("uniform", Some(42));
//! let mut b = create_ai("uniform", Some(42));
//! assert_eq!(a.throw(), b.throw());
//! ```
//!
//! ## Opponent Types
//!
//! Currently supported:
//! - `"uniform"` - draws uniformly at random from rock, paper, and scissor

use rochambot_engine::opponent::Opponent;

pub mod uniform;

/// Factory function to create an opponent by type string.
///
/// # Arguments
///
/// * `ai_type` - String identifier for the opponent type (e.g. "uniform")
/// * `seed` - RNG seed for reproducible throws; `None` seeds from entropy
///
/// # Panics
///
/// Panics if an unknown opponent type is requested. Currently only
/// "uniform" is supported.
///
/// # Example
///
/// ```rust
/// use rochambot_ai::create_ai;
///
/// let ai = create_ai("uniform", None);
/// assert_eq!(ai.name(), "UniformAi");
/// ```
pub fn create_ai(ai_type: &str, seed: Option<u64>) -> Box<dyn Opponent> {
    match ai_type {
        "uniform" => Box::new(uniform::UniformAi::new(seed)),
        _ => panic!("Unknown AI type: {}", ai_type),
    }
}
