//! Presentation overlay: what the board looks like beyond its cards' state.
//!
//! The preview reveal, deal-in and animations change what is drawn but not
//! which cards are flipped or matched, so they live here instead of on
//! `Card`. The game mutates the scene from its timers; `render` reads it.

use serde::{Deserialize, Serialize};

use crate::core::CardIndex;

/// Transient per-card animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Animation {
    /// Card sliding onto the board during the deal.
    Deal,
    /// Found pair.
    Pulse,
    /// Mismatched pair about to turn back.
    Shake,
    /// Win celebration.
    Bounce,
}

/// Overlay state for one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFx {
    /// Has the card been dealt onto the board yet?
    pub dealt: bool,
    /// Face shown by the preview regardless of `Card::flipped`.
    pub peek: bool,
    /// Running animation, if any.
    pub animation: Option<Animation>,
}

/// Overlay for a whole board plus the status message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    cards: Vec<CardFx>,
    message: Option<String>,
}

impl Scene {
    /// Fresh scene for `card_count` cards, none dealt yet.
    #[must_use]
    pub fn new(card_count: usize) -> Self {
        Self {
            cards: vec![CardFx::default(); card_count],
            message: None,
        }
    }

    /// Overlay for one card. Out-of-range indices read as the default.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> CardFx {
        self.cards.get(index.raw()).copied().unwrap_or_default()
    }

    /// Current status message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Mark a card dealt and start its deal animation.
    pub fn deal(&mut self, index: CardIndex) {
        if let Some(fx) = self.cards.get_mut(index.raw()) {
            fx.dealt = true;
            fx.animation = Some(Animation::Deal);
        }
    }

    /// Show or hide a card's face through the preview overlay.
    pub fn set_peek(&mut self, index: CardIndex, peek: bool) {
        if let Some(fx) = self.cards.get_mut(index.raw()) {
            fx.peek = peek;
        }
    }

    /// Start an animation on a card, replacing any running one.
    pub fn animate(&mut self, index: CardIndex, animation: Animation) {
        if let Some(fx) = self.cards.get_mut(index.raw()) {
            fx.animation = Some(animation);
        }
    }

    /// End `animation` on a card. A different, newer animation is left alone.
    pub fn finish(&mut self, index: CardIndex, animation: Animation) -> bool {
        match self.cards.get_mut(index.raw()) {
            Some(fx) if fx.animation == Some(animation) => {
                fx.animation = None;
                true
            }
            _ => false,
        }
    }

    /// Settle every card: dealt, no preview face, no animation.
    pub fn settle(&mut self) {
        for fx in &mut self.cards {
            *fx = CardFx {
                dealt: true,
                ..CardFx::default()
            };
        }
    }

    /// Replace the status message.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
    }

    /// Clear the status message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
