pub mod engine;
pub mod food;
pub mod scheduler;
pub mod speed;
pub mod state;

pub use engine::GameEngine;
pub use scheduler::TickScheduler;
pub use speed::SpeedRamp;
pub use state::{Direction, Phase, Position, Snapshot, Velocity};
