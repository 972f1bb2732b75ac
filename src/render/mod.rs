//! Presentation: overlay state, the pure `render` projection, and a text grid.
//!
//! The game never draws. After each transition the host calls
//! `Game::view()` (which calls `render`) and draws the resulting
//! `BoardView` however it likes. `text::TextLayout` is the terminal drawing.

mod scene;
mod view;
pub mod text;

pub use scene::{Animation, CardFx, Scene};
pub use text::TextLayout;
pub use view::{render, BoardView, CardView, Face, CARD_BACK};
