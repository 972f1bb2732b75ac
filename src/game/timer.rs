//! Everything the game can schedule.

use crate::core::CardIndex;
use crate::render::Animation;

/// Payload of a game timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameTimer {
    /// Deal one card onto the board.
    Deal(CardIndex),
    /// Show one card's face during the preview.
    PreviewReveal(CardIndex),
    /// Hide one card's face again.
    PreviewConceal(CardIndex),
    /// Preview over; unlock input.
    PreviewDone,
    /// Mismatched pair starts shaking.
    MismatchShake(CardIndex, CardIndex),
    /// Mismatched pair turns back and input unlocks.
    MismatchResolve(CardIndex, CardIndex),
    /// One card's win bounce.
    Bounce(CardIndex),
    /// End an animation on one card.
    Finish(CardIndex, Animation),
    /// Elapsed-time counter.
    Tick,
    /// Status message expired.
    ClearMessage,
}
