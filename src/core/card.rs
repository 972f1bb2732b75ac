//! Cards and the identifiers that address them.
//!
//! A card has no identity of its own: it is addressed by its position
//! (`CardIndex`) in the board's ordered sequence. Two cards form a pair when
//! they share an `ImageId`.

use serde::{Deserialize, Serialize};

/// Position of a card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Image identifier shown on a card's face.
///
/// The engine never loads or inspects images; identifiers are compared for
/// equality only. Hosts typically use a file name or URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub String);

impl ImageId {
    /// Create a new image identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A card on the board.
///
/// `matched` implies `flipped`; the board only ever sets both together.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Image on the card's face.
    pub image: ImageId,

    /// Is the face currently shown?
    pub flipped: bool,

    /// Has this card been paired?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(image: ImageId) -> Self {
        Self {
            image,
            flipped: false,
            matched: false,
        }
    }

    /// Face up and still waiting for a partner.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.flipped && !self.matched
    }

    /// Can this card be selected by a click?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }
}
