//! Game configuration types.
//!
//! Hosts configure a game at construction by providing:
//! - the number of pairs and one image identifier per pair
//! - `Timings`: every visual delay the game schedules
//! - an optional seed for reproducible deals
//!
//! The engine never generates images itself; a configuration whose image
//! list does not match the pair count is rejected, never truncated or padded.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::ImageId;
use super::error::{ConfigError, Result};

/// Default number of pairs on the board.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Milliseconds on the game's virtual clock.
pub type Millis = u64;

/// Visual and gameplay delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Delay between consecutive cards being dealt onto the board.
    pub deal_stagger: Millis,

    /// Length of one card's deal animation, and the pause after the last
    /// card is dealt before the preview reveal.
    pub deal_settle: Millis,

    /// Delay between consecutive cards turning during the preview.
    pub preview_stagger: Millis,

    /// How long the preview keeps faces visible before concealing them.
    pub preview_hold: Millis,

    /// How long a mismatched pair stays visible before shaking.
    pub mismatch_delay: Millis,

    /// Length of the mismatch shake; cards turn back when it ends.
    pub shake: Millis,

    /// Length of the pulse on a found pair.
    pub pulse: Millis,

    /// Delay between consecutive cards bouncing after a win.
    pub bounce_stagger: Millis,

    /// Length of one card's win bounce.
    pub bounce: Millis,

    /// How long a status message stays visible.
    pub message: Millis,

    /// Interval of the elapsed-time counter.
    pub tick: Millis,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            deal_stagger: 100,
            deal_settle: 500,
            preview_stagger: 50,
            preview_hold: 2000,
            mismatch_delay: 1000,
            shake: 500,
            pulse: 500,
            bounce_stagger: 100,
            bounce: 600,
            message: 2000,
            tick: 1000,
        }
    }
}

impl Timings {
    /// Offset of the `position`-th step of a wave spaced `stagger` ms apart.
    ///
    /// Saturates instead of overflowing, so absurd timings only push timers
    /// to the end of the clock.
    #[must_use]
    pub fn staggered(stagger: Millis, position: usize) -> Millis {
        let position = Millis::try_from(position).unwrap_or(Millis::MAX);
        stagger.saturating_mul(position)
    }

    /// Offset from the start of a game at which all faces are revealed.
    #[must_use]
    pub fn reveal_at(&self, card_count: usize) -> Millis {
        Self::staggered(self.deal_stagger, card_count).saturating_add(self.deal_settle)
    }

    /// Offset from the start of a game at which faces start to conceal.
    #[must_use]
    pub fn conceal_at(&self, card_count: usize) -> Millis {
        self.reveal_at(card_count).saturating_add(self.preview_hold)
    }

    /// Total length of the pre-game preview for a board of `card_count` cards.
    ///
    /// Input unlocks once this much time has passed since (re)start.
    #[must_use]
    pub fn preview_duration(&self, card_count: usize) -> Millis {
        self.conceal_at(card_count)
            .saturating_add(Self::staggered(self.preview_stagger, card_count))
    }

    /// Time from a mismatching click until the cards are face down again.
    #[must_use]
    pub fn mismatch_duration(&self) -> Millis {
        self.mismatch_delay.saturating_add(self.shake)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of pairs on the board.
    pub pair_count: usize,

    /// One distinct image identifier per pair.
    pub images: Vec<ImageId>,

    /// Visual and gameplay delays.
    pub timings: Timings,

    /// Seed for the deal. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            images: (1..=DEFAULT_PAIR_COUNT)
                .map(|i| ImageId::new(format!("img{i}.jpg")))
                .collect(),
            timings: Timings::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with one pair per image.
    pub fn new<I>(images: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        let images: Vec<ImageId> = images.into_iter().map(Into::into).collect();
        Self {
            pair_count: images.len(),
            images,
            ..Self::default()
        }
    }

    /// Set the pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Replace the image list. The pair count is left as is.
    #[must_use]
    pub fn with_images<I>(mut self, images: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Set the timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Set the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards a board built from this configuration holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check the configuration before a game is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }

        if self.images.len() != self.pair_count {
            return Err(ConfigError::ImageCountMismatch {
                expected: self.pair_count,
                found: self.images.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for (position, image) in self.images.iter().enumerate() {
            if image.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyImage(position));
            }
            if !seen.insert(image) {
                return Err(ConfigError::DuplicateImage(image.clone()));
            }
        }

        if self.timings.tick == 0 {
            return Err(ConfigError::ZeroTick);
        }

        Ok(())
    }
}
