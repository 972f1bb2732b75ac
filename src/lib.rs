//! # memory-match
//!
//! A memory-matching (concentration) card game engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit Game Objects**: A `Game` is built from an injected
//!    `GameConfig` and has an explicit create/reset/destroy lifecycle.
//!    Any number of independent games can exist side by side.
//!
//! 2. **No Ambient Callbacks**: Every delay is a timer on a cancellable
//!    queue with a virtual clock. Reset clears the queue and bumps its epoch,
//!    so nothing from an old game can touch a new one.
//!
//! 3. **Render Is a Function**: `render(board, state, scene)` projects the
//!    game into a `BoardView`. State transitions are testable without any
//!    display surface.
//!
//! ## Modules
//!
//! - `core`: Cards, board and deal, RNG, configuration, state, errors
//! - `schedule`: Timer queue and stopwatch
//! - `render`: Presentation overlay, view projection, text grid
//! - `game`: Controller state machine and input resolution

pub mod core;
pub mod schedule;
pub mod render;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, Card, CardIndex, ConfigError, GameConfig, GameRng, GameState, ImageId, Millis, Phase,
    Timings,
};

pub use crate::schedule::{Epoch, Stopwatch, TimerHandle, TimerQueue};

pub use crate::render::{render, Animation, BoardView, CardView, Face, Scene, TextLayout};

pub use crate::game::{Game, IgnoreReason, Input, Outcome};
