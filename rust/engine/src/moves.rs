use serde::{Deserialize, Serialize};

/// A classified player or AI hand gesture.
/// The fundamental value exchanged between the capture boundary, the round
/// engine, and the presentation layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Closed fist (no fingers extended)
    Rock,
    /// Open palm (all five fingers extended)
    Paper,
    /// Index and middle fingers extended
    Scissor,
    /// A hand was detected but the gesture matched no known move
    Unknown,
    /// No hand was detected this tick
    NoHand,
}

impl Move {
    /// True for the three moves that can actually be played in a round.
    pub fn is_throw(&self) -> bool {
        matches!(self, Move::Rock | Move::Paper | Move::Scissor)
    }
}

/// The outcome of a single round from the player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player's throw beat the AI's
    Win,
    /// AI's throw beat the player's
    Lose,
    /// Both sides threw the same move
    Draw,
    /// The player's gesture was not a valid throw when the countdown expired
    Unknown,
}

/// The side that won the overall match once a score threshold is reached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MatchWinner {
    /// The human player reached the threshold first
    Player,
    /// The AI opponent reached the threshold first
    Ai,
}

pub fn all_throws() -> [Move; 3] {
    [Move::Rock, Move::Paper, Move::Scissor]
}
