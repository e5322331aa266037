use crate::moves::Move;

/// Source of the house move revealed at the end of each countdown.
///
/// The round engine asks its opponent for exactly one move per round, at the
/// instant the countdown expires. Implementations must return one of the
/// three throws (rock, paper, or scissor) and must not block; the production
/// implementation lives in the `rochambot-ai` crate and draws uniformly at
/// random from a seeded RNG.
pub trait Opponent: Send {
    /// Returns the move the AI reveals this round. Must be a throw.
    fn throw(&mut self) -> Move;

    /// Returns the name/identifier of this opponent implementation.
    fn name(&self) -> &str;
}
