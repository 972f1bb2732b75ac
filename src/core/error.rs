//! Configuration errors.
//!
//! Play itself never fails: bad clicks and stale timers are ignored. The only
//! fallible step is building a game from a configuration.

use thiserror::Error;

use super::card::ImageId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pair count must be at least 1")]
    NoPairs,

    #[error("expected {expected} image identifiers (one per pair), got {found}")]
    ImageCountMismatch { expected: usize, found: usize },

    #[error("image identifier {0} is listed more than once")]
    DuplicateImage(ImageId),

    #[error("image identifier at position {0} is empty")]
    EmptyImage(usize),

    #[error("tick interval must be at least 1 ms")]
    ZeroTick,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
