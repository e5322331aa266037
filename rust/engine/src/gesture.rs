use crate::moves::Move;

/// Number of finger-extension flags in one hand detection.
pub const FINGER_COUNT: usize = 5;

/// Classifies a set of finger-extension flags into a game move.
///
/// The flags are ordered thumb, index, middle, ring, pinky; `true` means the
/// digit is extended. The rules are checked in precedence order:
///
/// 1. No fingers extended → [`Move::Rock`]
/// 2. Index and middle only (exactly two extended) → [`Move::Scissor`]
/// 3. All five extended → [`Move::Paper`]
/// 4. Anything else → [`Move::Unknown`]
///
/// Pure and total: no side effects, always returns a move.
///
/// # Examples
///
/// ```
/// use rochambot_engine::gesture::classify;
/// use rochambot_engine::moves::Move;
///
/// assert_eq!(classify([false; 5]), Move::Rock);
/// assert_eq!(classify([false, true, true, false, false]), Move::Scissor);
/// assert_eq!(classify([true; 5]), Move::Paper);
/// assert_eq!(classify([true, false, false, false, true]), Move::Unknown);
/// ```
pub fn classify(fingers: [bool; FINGER_COUNT]) -> Move {
    let total = fingers.iter().filter(|up| **up).count();
    if total == 0 {
        Move::Rock
    } else if fingers[1] && fingers[2] && total == 2 {
        Move::Scissor
    } else if total == FINGER_COUNT {
        Move::Paper
    } else {
        Move::Unknown
    }
}

/// Boundary normalization for a possibly absent hand detection.
///
/// The gesture source yields zero or one hand per frame; an absent detection
/// becomes [`Move::NoHand`] rather than an error.
pub fn classify_detection(fingers: Option<[bool; FINGER_COUNT]>) -> Move {
    match fingers {
        Some(flags) => classify(flags),
        None => Move::NoHand,
    }
}
