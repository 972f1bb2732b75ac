//! The game controller: input handling, match checking, win detection, reset.
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::core::{GameConfig, ImageId, Phase};
//! use memory_match::game::{Game, Outcome};
//!
//! let config = GameConfig::new(["cat.png", "dog.png"]).with_seed(7);
//! let mut game = Game::new(config).unwrap();
//!
//! // Clicks are ignored until the preview has played
//! let preview = game.config().timings.preview_duration(game.board().len());
//! game.advance(preview);
//! assert_eq!(game.state().phase, Phase::Ready);
//!
//! let cats = game.board().positions_of(&ImageId::new("cat.png"));
//! game.click(cats[0].raw());
//! let outcome = game.click(cats[1].raw());
//!
//! assert!(matches!(outcome, Outcome::Matched(..)));
//! assert_eq!(game.state().moves, 1);
//! assert_eq!(game.state().matches, 1);
//! ```

mod controller;
mod input;
pub mod messages;
mod outcome;
mod timer;

pub use controller::{Game, Selection};
pub use input::Input;
pub use outcome::{IgnoreReason, Outcome};
pub use timer::GameTimer;
