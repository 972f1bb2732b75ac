//! Status message texts.

/// Shown when the preview ends and input unlocks.
pub const GAME_STARTED: &str = "The game has started! Find the pairs!";

/// Shown when a pair is found and the game goes on.
pub const PAIR_FOUND: &str = "Nice! Pair found!";

/// End-of-game message with the final counters.
#[must_use]
pub fn victory(moves: u32, elapsed_seconds: u32) -> String {
    format!("Congratulations! You won with {moves} moves in {elapsed_seconds} seconds!")
}
