use crate::moves::{Move, RoundOutcome};

/// True when throw `a` beats throw `b` under the standard relation:
/// rock beats scissor, scissor beats paper, paper beats rock.
///
/// Returns `false` for any pair involving a non-throw.
pub fn beats(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Rock, Move::Scissor) | (Move::Scissor, Move::Paper) | (Move::Paper, Move::Rock)
    )
}

/// Computes the round outcome for the player's move against the AI's.
///
/// A player move that is not a valid throw (no hand, or an unrecognized
/// gesture) always resolves to [`RoundOutcome::Unknown`] and scores for
/// neither side; this is deliberately distinct from a draw. The AI move is
/// expected to be a throw (see [`crate::opponent::Opponent`]).
///
/// # Examples
///
/// ```
/// use rochambot_engine::moves::{Move, RoundOutcome};
/// use rochambot_engine::rules::round_outcome;
///
/// assert_eq!(round_outcome(Move::Rock, Move::Scissor), RoundOutcome::Win);
/// assert_eq!(round_outcome(Move::Paper, Move::Scissor), RoundOutcome::Lose);
/// assert_eq!(round_outcome(Move::Paper, Move::Paper), RoundOutcome::Draw);
/// assert_eq!(round_outcome(Move::NoHand, Move::Rock), RoundOutcome::Unknown);
/// ```
pub fn round_outcome(player: Move, ai: Move) -> RoundOutcome {
    if !player.is_throw() {
        return RoundOutcome::Unknown;
    }
    if player == ai {
        RoundOutcome::Draw
    } else if beats(player, ai) {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}
