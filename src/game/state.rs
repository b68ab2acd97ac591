use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self, tile_count: i16) -> bool {
        (0..tile_count).contains(&self.x) && (0..tile_count).contains(&self.y)
    }

    /// Step by `velocity`, re-entering from the opposite edge on any axis that leaves the board.
    /// The flag reports whether an edge was crossed.
    pub fn stepped_wrapping(&self, velocity: Velocity, tile_count: i16) -> (Self, bool) {
        let raw = Position::new(self.x + velocity.dx, self.y + velocity.dy);
        if raw.in_bounds(tile_count) {
            return (raw, false);
        }

        let wrap = |v: i16| {
            if v < 0 {
                tile_count - 1
            } else if v >= tile_count {
                0
            } else {
                v
            }
        };
        (Position::new(wrap(raw.x), wrap(raw.y)), true)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Per-tick displacement of the head. `ZERO` means the snake has not started moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub dx: i16,
    pub dy: i16,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn is_zero(&self) -> bool {
        *self == Velocity::ZERO
    }

    pub fn reversed(&self) -> Velocity {
        Velocity {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// True when `other` would send the head straight back onto the neck.
    pub fn is_opposite(&self, other: Velocity) -> bool {
        !self.is_zero() && other == self.reversed()
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Velocity { dx: 0, dy: -1 },
            Direction::Down => Velocity { dx: 0, dy: 1 },
            Direction::Left => Velocity { dx: -1, dy: 0 },
            Direction::Right => Velocity { dx: 1, dy: 0 },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Running => "Running",
            Phase::Paused => "Paused",
            Phase::Over => "Over",
        }
    }
}

/// Read-only view handed to the renderer once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    /// Head first
    pub snake: &'a [Position],
    pub food: Position,
    pub tile_count: i16,
    pub boundary_cross_count: u32,
    pub last_boundary_cross: Option<DateTime<Local>>,
    pub score: u32,
    pub best_score: u32,
    pub game_speed_ms: u64,
    pub phase: Phase,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_board() {
        let (next, crossed) = Position::new(3, 4).stepped_wrapping(Direction::Down.into(), 10);
        assert_eq!(next, Position::new(3, 5));
        assert!(!crossed);
    }

    #[test]
    fn test_step_wraps_each_edge() {
        let cases = [
            (Position::new(9, 4), Direction::Right, Position::new(0, 4)),
            (Position::new(0, 4), Direction::Left, Position::new(9, 4)),
            (Position::new(4, 0), Direction::Up, Position::new(4, 9)),
            (Position::new(4, 9), Direction::Down, Position::new(4, 0)),
        ];

        for (from, dir, expected) in cases {
            let (next, crossed) = from.stepped_wrapping(dir.into(), 10);
            assert_eq!(next, expected, "stepping {:?} from {:?}", dir, from);
            assert!(crossed);
        }
    }

    #[test]
    fn test_opposite_velocity() {
        let right = Velocity::from(Direction::Right);
        assert!(right.is_opposite(Direction::Left.into()));
        assert!(!right.is_opposite(Direction::Up.into()));
        assert!(!right.is_opposite(Direction::Right.into()));
        // Nothing is opposite to standing still
        assert!(!Velocity::ZERO.is_opposite(Direction::Left.into()));
    }
}
