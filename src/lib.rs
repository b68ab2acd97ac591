//! Single-player snake on a wrap-around grid.
//!
//! The [`game::GameEngine`] state machine is independent of any window; the
//! `wrap-snake` binary drives it from a ggez event loop.

pub mod config;
pub mod game;
pub mod input;
pub mod overlay;
pub mod render;
pub mod score;

pub use config::GameConfig;
pub use game::{Direction, GameEngine, Phase, Position, Snapshot, Velocity};
pub use input::InputEvent;
pub use overlay::{Overlay, OverlayPresenter};
pub use score::{JsonScoreStore, MemoryScoreStore, ScoreStore};
