//! Uniform random opponent.
//!
//! Draws each round's throw uniformly at random from rock, paper, and
//! scissor, using a seeded ChaCha RNG so matches are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rochambot_engine::moves::{Move, all_throws};
use rochambot_engine::opponent::Opponent;

/// The production opponent: an unexploitable uniform mixed strategy.
///
/// # Example
///
/// ```rust
/// use rochambot_ai::uniform::UniformAi;
/// use rochambot_engine::opponent::Opponent;
///
/// let mut ai = UniformAi::new(Some(7));
/// assert!(ai.throw().is_throw());
/// ```
#[derive(Debug)]
pub struct UniformAi {
    rng: ChaCha20Rng,
}

impl UniformAi {
    /// Creates a uniform opponent. `None` picks a random seed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Opponent for UniformAi {
    fn throw(&mut self) -> Move {
        let throws = all_throws();
        throws[self.rng.random_range(0..throws.len())]
    }

    fn name(&self) -> &str {
        "UniformAi"
    }
}
