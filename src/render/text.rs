//! Plain-text grid for terminal hosts.
//!
//! ```text
//! 0 <img3.jpg>+ 1 [   ?    ]
//! 2 <img3.jpg>+ 3 [img5.jpg]
//! Moves: 2  Time: 4s  Pairs: 1/2
//! Nice! Pair found!
//! ```
//!
//! `[...]` is a plain card, `<...>` a matched one. The character after a
//! cell marks a running animation.

use std::fmt::Write;

use super::scene::Animation;
use super::view::{BoardView, CardView, Face, CARD_BACK};

/// Grid layout for `BoardView`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLayout {
    columns: usize,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self { columns: 4 }
    }
}

impl TextLayout {
    /// Layout with `columns` cards per row.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        assert!(columns > 0, "Need at least one column");
        Self { columns }
    }

    /// Draw the board and status lines.
    #[must_use]
    pub fn draw(&self, view: &BoardView) -> String {
        let label_width = view.cards.len().saturating_sub(1).to_string().len();
        let cell_width = view
            .cards
            .iter()
            .map(|card| card.front.as_str().chars().count())
            .max()
            .unwrap_or(0)
            .max(CARD_BACK.len());

        let mut out = String::new();
        for row in view.cards.chunks(self.columns) {
            let line: Vec<String> = row
                .iter()
                .map(|card| draw_cell(card, label_width, cell_width))
                .collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "Moves: {}  Time: {}s  Pairs: {}/{}",
            view.moves, view.elapsed_seconds, view.matches, view.pair_count
        );
        if let Some(message) = &view.message {
            let _ = writeln!(out, "{message}");
        }
        out
    }
}

fn draw_cell(card: &CardView, label_width: usize, cell_width: usize) -> String {
    let label = format!("{:>label_width$}", card.index.raw());
    if !card.dealt {
        // Keep the grid aligned while the deal is still running
        return format!("{label} {:width$}", "", width = cell_width + 3);
    }

    let content = match card.face {
        Face::Concealed => CARD_BACK,
        Face::Revealed => card.front.as_str(),
    };
    let (open, close) = if card.matched { ('<', '>') } else { ('[', ']') };
    let marker = match card.animation {
        Some(Animation::Pulse) => '+',
        Some(Animation::Shake) => '~',
        Some(Animation::Bounce) => '^',
        Some(Animation::Deal) | None => ' ',
    };

    format!("{label} {open}{content:^cell_width$}{close}{marker}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, CardIndex, GameState};
    use crate::render::{render, Scene};

    fn settled(board: &Board) -> Scene {
        let mut scene = Scene::new(board.len());
        scene.settle();
        scene
    }

    #[test]
    fn test_concealed_grid() {
        let board = Board::from_images(["abc", "xyz", "abc", "xyz"]);
        let view = render(&board, &GameState::new(), &settled(&board));

        let text = TextLayout::new(2).draw(&view);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "0 [ ? ]  1 [ ? ]");
        assert_eq!(lines[1], "2 [ ? ]  3 [ ? ]");
        assert_eq!(lines[2], "Moves: 0  Time: 0s  Pairs: 0/2");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_revealed_matched_and_animated() {
        let mut board = Board::from_images(["abc", "xyz", "abc", "xyz"]);
        board.flip(CardIndex::new(1));
        board.mark_matched(CardIndex::new(0));
        board.mark_matched(CardIndex::new(2));

        let mut scene = settled(&board);
        scene.animate(CardIndex::new(0), Animation::Pulse);
        scene.set_message("Nice!");

        let view = render(&board, &GameState::new(), &scene);
        let text = TextLayout::new(4).draw(&view);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "0 <abc>+ 1 [xyz]  2 <abc>  3 [ ? ]");
        assert_eq!(lines[2], "Nice!");
    }

    #[test]
    fn test_undealt_cards_are_blank() {
        let board = Board::from_images(["x", "x"]);
        let mut scene = Scene::new(2);
        scene.deal(CardIndex::new(0));

        let view = render(&board, &GameState::new(), &scene);
        let text = TextLayout::new(2).draw(&view);

        assert_eq!(text.lines().next(), Some("0 [?]  1"));
    }

    #[test]
    #[should_panic(expected = "Need at least one column")]
    fn test_zero_columns() {
        TextLayout::new(0);
    }
}
