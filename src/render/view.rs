//! Pure projection from game data to a drawable view.

use serde::Serialize;

use crate::core::{Board, CardIndex, GameState, ImageId, Phase};

use super::scene::{Animation, Scene};

/// Text shown on a concealed card's back.
pub const CARD_BACK: &str = "?";

/// Which face of a card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Face {
    /// Back up; the image is hidden.
    Concealed,
    /// Front up, by a flip, a match, or the preview.
    Revealed,
}

/// One card as drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// Board position, used to route clicks back to the card.
    pub index: CardIndex,
    /// Image on the revealed face.
    pub front: ImageId,
    /// Face currently showing.
    pub face: Face,
    /// Matched marker.
    pub matched: bool,
    /// Is the card on the board yet (false while the deal is running)?
    pub dealt: bool,
    /// Running animation.
    pub animation: Option<Animation>,
}

/// Whole board plus status outputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Cards in board order.
    pub cards: Vec<CardView>,
    /// Completed pair comparisons.
    pub moves: u32,
    /// Pairs found so far.
    pub matches: u32,
    /// Pairs on the board.
    pub pair_count: usize,
    /// Whole seconds since the first flip.
    pub elapsed_seconds: u32,
    /// Current phase.
    pub phase: Phase,
    /// Are clicks being ignored right now?
    pub input_locked: bool,
    /// Status message, if one is showing.
    pub message: Option<String>,
}

impl BoardView {
    /// Card view at a board position.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&CardView> {
        self.cards.get(index.raw())
    }

    /// Indices of cards currently showing their front.
    #[must_use]
    pub fn revealed(&self) -> Vec<CardIndex> {
        self.cards
            .iter()
            .filter(|card| card.face == Face::Revealed)
            .map(|card| card.index)
            .collect()
    }
}

/// Project board, state and overlay into a view.
///
/// Covers every card on every call and depends on nothing but its inputs.
#[must_use]
pub fn render(board: &Board, state: &GameState, scene: &Scene) -> BoardView {
    let cards = board
        .iter()
        .map(|(index, card)| {
            let fx = scene.card(index);
            let face = if card.flipped || card.matched || fx.peek {
                Face::Revealed
            } else {
                Face::Concealed
            };

            CardView {
                index,
                front: card.image.clone(),
                face,
                matched: card.matched,
                dealt: fx.dealt,
                animation: fx.animation,
            }
        })
        .collect();

    BoardView {
        cards,
        moves: state.moves,
        matches: state.matches,
        pair_count: board.pair_count(),
        elapsed_seconds: state.elapsed_seconds,
        phase: state.phase,
        input_locked: state.input_locked(),
        message: scene.message().map(str::to_owned),
    }
}
