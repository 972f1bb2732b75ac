//! Core game types: cards, board, RNG, configuration, state, errors.
//!
//! Everything here is plain data plus the deal. Sequencing and timers live in
//! `schedule`; the state machine that ties them together lives in `game`.

pub mod card;
pub mod board;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use card::{Card, CardIndex, ImageId};
pub use board::Board;
pub use rng::GameRng;
pub use config::{GameConfig, Millis, Timings, DEFAULT_PAIR_COUNT};
pub use state::{GameState, Phase};
pub use error::{ConfigError, Result};
