//! The board: an ordered sequence of cards.
//!
//! Uses an `im` persistent vector so `Board::clone` is O(1); hosts can keep
//! snapshots of earlier boards without copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardIndex, ImageId};
use super::rng::GameRng;

/// Ordered sequence of cards, each image appearing exactly twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
}

impl Board {
    /// Deal a fresh board.
    ///
    /// Takes two copies of each image, applies a uniform random permutation
    /// and returns the cards face-down and unmatched. `images` is expected
    /// to hold distinct identifiers; `GameConfig::validate` enforces that.
    #[must_use]
    pub fn deal(images: &[ImageId], rng: &mut GameRng) -> Self {
        let mut faces: Vec<ImageId> = images
            .iter()
            .flat_map(|image| [image.clone(), image.clone()])
            .collect();

        rng.shuffle(&mut faces);

        Self {
            cards: faces.into_iter().map(Card::new).collect(),
        }
    }

    /// Build a board with a fixed card order.
    ///
    /// Useful for hosts replaying a known layout and for tests.
    pub fn from_images<I>(images: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ImageId>,
    {
        Self {
            cards: images.into_iter().map(|image| Card::new(image.into())).collect(),
        }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the board empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Resolve a raw position to a card index, if it is on the board.
    #[must_use]
    pub fn index(&self, raw: usize) -> Option<CardIndex> {
        (raw < self.cards.len()).then_some(CardIndex::new(raw))
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.raw())
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = (CardIndex, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardIndex::new(i), card))
    }

    /// Indices of every card showing `image`.
    #[must_use]
    pub fn positions_of(&self, image: &ImageId) -> Vec<CardIndex> {
        self.iter()
            .filter(|(_, card)| &card.image == image)
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of face-up cards still waiting for a partner.
    #[must_use]
    pub fn pending(&self) -> Vec<CardIndex> {
        self.iter()
            .filter(|(_, card)| card.is_pending())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }

    /// Do two cards show the same image?
    #[must_use]
    pub fn same_image(&self, a: CardIndex, b: CardIndex) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(first), Some(second)) => first.image == second.image,
            _ => false,
        }
    }

    /// Turn a card face up. Returns false if it was not selectable.
    pub fn flip(&mut self, index: CardIndex) -> bool {
        match self.cards.get_mut(index.raw()) {
            Some(card) if card.is_selectable() => {
                card.flipped = true;
                true
            }
            _ => false,
        }
    }

    /// Turn a pending card back face down. Matched cards stay up.
    pub fn conceal(&mut self, index: CardIndex) -> bool {
        match self.cards.get_mut(index.raw()) {
            Some(card) if card.is_pending() => {
                card.flipped = false;
                true
            }
            _ => false,
        }
    }

    /// Mark a card matched. Matched cards are always face up.
    pub fn mark_matched(&mut self, index: CardIndex) -> bool {
        match self.cards.get_mut(index.raw()) {
            Some(card) if !card.matched => {
                card.flipped = true;
                card.matched = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn images(names: &[&str]) -> Vec<ImageId> {
        names.iter().map(|&name| ImageId::new(name)).collect()
    }

    #[test]
    fn test_deal_has_every_image_twice() {
        let mut rng = GameRng::new(42);
        let board = Board::deal(&images(&["a", "b", "c", "d"]), &mut rng);

        assert_eq!(board.len(), 8);
        assert_eq!(board.pair_count(), 4);

        let mut counts: FxHashMap<&ImageId, usize> = FxHashMap::default();
        for (_, card) in board.iter() {
            *counts.entry(&card.image).or_default() += 1;
            assert!(!card.flipped);
            assert!(!card.matched);
        }
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 2));
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let set = images(&["a", "b", "c", "d", "e"]);
        let first = Board::deal(&set, &mut GameRng::new(7));
        let second = Board::deal(&set, &mut GameRng::new(7));

        assert_eq!(first, second);
    }

    #[test]
    fn test_index_bounds() {
        let board = Board::from_images(["a", "a"]);
        assert_eq!(board.index(1), Some(CardIndex::new(1)));
        assert_eq!(board.index(2), None);
    }

    #[test]
    fn test_flip_and_conceal() {
        let mut board = Board::from_images(["a", "b", "a", "b"]);
        let first = CardIndex::new(0);

        assert!(board.flip(first));
        assert!(!board.flip(first), "already face up");
        assert_eq!(board.pending(), vec![first]);

        assert!(board.conceal(first));
        assert!(!board.conceal(first), "already face down");
        assert!(board.pending().is_empty());
    }

    #[test]
    fn test_matched_cards_stay_up() {
        let mut board = Board::from_images(["a", "b", "a", "b"]);
        let index = CardIndex::new(2);

        board.flip(index);
        assert!(board.mark_matched(index));
        assert!(!board.conceal(index));
        assert!(!board.flip(index));

        let card = board.get(index).unwrap();
        assert!(card.flipped && card.matched);
        assert_eq!(board.matched_count(), 1);
    }

    #[test]
    fn test_positions_and_same_image() {
        let board = Board::from_images(["a", "b", "b", "a"]);

        assert_eq!(
            board.positions_of(&ImageId::new("a")),
            vec![CardIndex::new(0), CardIndex::new(3)]
        );
        assert!(board.same_image(CardIndex::new(1), CardIndex::new(2)));
        assert!(!board.same_image(CardIndex::new(0), CardIndex::new(1)));
        assert!(!board.same_image(CardIndex::new(0), CardIndex::new(99)));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::from_images(["a", "a"]);
        let snapshot = board.clone();

        board.flip(CardIndex::new(0));

        assert!(board.get(CardIndex::new(0)).unwrap().flipped);
        assert!(!snapshot.get(CardIndex::new(0)).unwrap().flipped);
    }
}
