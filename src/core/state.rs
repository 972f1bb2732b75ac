//! Game progression: phase and counters.
//!
//! ## Phases
//!
//! ```text
//! Idle --preview done--> Ready --click--> OneSelected --click--> CheckingPair
//!                          ^                                        |
//!                          +------------ match / mismatch ----------+
//!                                                                   |
//!                                          Won <--- last match -----+
//! ```
//!
//! Input is locked in `Idle`, `CheckingPair` and `Won`.

use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-game deal and preview; clicks are ignored.
    #[default]
    Idle,
    /// Waiting for the first card of a pair.
    Ready,
    /// One card face up, waiting for its partner.
    OneSelected,
    /// Two cards face up and being compared.
    CheckingPair,
    /// Every pair found.
    Won,
}

impl Phase {
    /// Are clicks rejected in this phase?
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Phase::Idle | Phase::CheckingPair | Phase::Won)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Ready => "ready",
            Phase::OneSelected => "one selected",
            Phase::CheckingPair => "checking pair",
            Phase::Won => "won",
        };
        f.write_str(name)
    }
}

/// Counters and phase for one game.
///
/// Zeroed on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Completed pair comparisons.
    pub moves: u32,

    /// Pairs found.
    pub matches: u32,

    /// Seconds since the first accepted flip.
    pub elapsed_seconds: u32,

    /// Has the first card of this game been flipped?
    pub started: bool,

    /// Current phase.
    pub phase: Phase,
}

impl GameState {
    /// Create a fresh state in the `Idle` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Are clicks currently rejected?
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_zeroed_and_idle() {
        let state = GameState::new();

        assert_eq!(state.moves, 0);
        assert_eq!(state.matches, 0);
        assert_eq!(state.elapsed_seconds, 0);
        assert!(!state.started);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.input_locked());
    }

    #[test]
    fn test_locked_phases() {
        assert!(Phase::Idle.is_locked());
        assert!(!Phase::Ready.is_locked());
        assert!(!Phase::OneSelected.is_locked());
        assert!(Phase::CheckingPair.is_locked());
        assert!(Phase::Won.is_locked());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(format!("{}", Phase::CheckingPair), "checking pair");
        assert_eq!(format!("{}", Phase::Won), "won");
    }
}
