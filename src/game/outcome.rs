//! Result of feeding one input to the game.

use serde::{Deserialize, Serialize};

use crate::core::{CardIndex, Phase};

/// Why an input changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The click target did not name a card.
    Unresolved,
    /// The index is past the end of the board.
    OutOfRange,
    /// Input is locked in this phase.
    Locked(Phase),
    /// The card is already face up or matched.
    AlreadyRevealed,
    /// The card is the one already selected.
    SameCard,
}

/// What happened in response to an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No state changed.
    Ignored(IgnoreReason),
    /// First card of a pair turned face up.
    Flipped(CardIndex),
    /// Second card matched the first.
    Matched(CardIndex, CardIndex),
    /// Second card did not match; both turn back after a delay.
    Mismatched(CardIndex, CardIndex),
    /// Last pair found.
    Won { moves: u32, elapsed_seconds: u32 },
    /// A fresh game was dealt.
    Reset,
}

impl Outcome {
    /// Did this input change the game?
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Outcome::Ignored(_))
    }
}
