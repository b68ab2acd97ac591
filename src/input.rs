use crate::game::Direction;
use ggez::input::keyboard::KeyCode;

/// A discrete player intent, decoupled from the device that produced it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePauseOrStart,
    Restart,
}

impl InputEvent {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            InputEvent::MoveUp => Some(Direction::Up),
            InputEvent::MoveDown => Some(Direction::Down),
            InputEvent::MoveLeft => Some(Direction::Left),
            InputEvent::MoveRight => Some(Direction::Right),
            InputEvent::TogglePauseOrStart | InputEvent::Restart => None,
        }
    }

    /// Arrow keys and WASD steer, Space starts or pauses, R restarts.
    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match keycode {
            KeyCode::Up | KeyCode::W => Some(InputEvent::MoveUp),
            KeyCode::Down | KeyCode::S => Some(InputEvent::MoveDown),
            KeyCode::Left | KeyCode::A => Some(InputEvent::MoveLeft),
            KeyCode::Right | KeyCode::D => Some(InputEvent::MoveRight),
            KeyCode::Space => Some(InputEvent::TogglePauseOrStart),
            KeyCode::R => Some(InputEvent::Restart),
            _ => None,
        }
    }
}
