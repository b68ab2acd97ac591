//! Turns a [`Snapshot`] into a flat list of draw commands.
//!
//! Nothing here touches a ggez `Context`, so the layout can be checked in tests;
//! the binary replays the commands onto a canvas.

use crate::game::{Phase, Snapshot};
use crate::overlay::Overlay;
use chrono::{DateTime, Local};
use ggez::graphics::{Color, Rect};

/// Height of the status strip under the board, in pixels
pub const HUD_HEIGHT: f32 = 40.0;
/// Gap left between neighbouring cells
const CELL_INSET: f32 = 2.0;
const DEBUG_TEXT_SCALE: f32 = 12.0;
const HUD_TEXT_SCALE: f32 = 18.0;
const OVERLAY_TITLE_SCALE: f32 = 36.0;
const OVERLAY_MESSAGE_SCALE: f32 = 20.0;

pub const BACKGROUND_COLOR: Color = Color::new(0.969, 0.980, 0.988, 1.0);
const GRID_COLOR: Color = Color::new(0.886, 0.910, 0.941, 1.0);
const HEAD_COLOR: Color = Color::new(0.173, 0.322, 0.510, 1.0);
const BODY_COLOR: Color = Color::new(0.192, 0.510, 0.808, 1.0);
const FOOD_COLOR: Color = Color::new(0.898, 0.243, 0.243, 1.0);
const TEXT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const OVERLAY_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.6);

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        scale: f32,
        color: Color,
    },
}

pub struct BoardRenderer {
    cell_size: f32,
}

impl BoardRenderer {
    pub fn new(cell_size: i16) -> Self {
        Self {
            cell_size: cell_size as f32,
        }
    }

    /// Everything to paint for one frame, back to front.
    pub fn commands(
        &self,
        snapshot: &Snapshot<'_>,
        overlay: &Overlay,
        now: DateTime<Local>,
    ) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(snapshot.snake.len() + 4 * snapshot.tile_count as usize + 8);

        for (i, segment) in snapshot.snake.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            commands.push(self.cell(segment.x, segment.y, color));
        }
        commands.push(self.cell(snapshot.food.x, snapshot.food.y, FOOD_COLOR));

        self.push_grid(&mut commands, snapshot.tile_count);
        self.push_debug_info(&mut commands, snapshot, now);
        self.push_hud(&mut commands, snapshot);

        if let (Some(title), Some(message)) = (overlay.title(), overlay.message()) {
            self.push_overlay(&mut commands, snapshot.tile_count, title, message);
        }

        commands
    }

    fn cell(&self, x: i16, y: i16, color: Color) -> DrawCommand {
        DrawCommand::Rect {
            rect: Rect::new(
                x as f32 * self.cell_size,
                y as f32 * self.cell_size,
                self.cell_size - CELL_INSET,
                self.cell_size - CELL_INSET,
            ),
            color,
        }
    }

    fn push_grid(&self, commands: &mut Vec<DrawCommand>, tile_count: i16) {
        let board = tile_count as f32 * self.cell_size;
        for i in 0..=tile_count {
            let offset = i as f32 * self.cell_size;
            commands.push(DrawCommand::Rect {
                rect: Rect::new(offset, 0.0, 1.0, board),
                color: GRID_COLOR,
            });
            commands.push(DrawCommand::Rect {
                rect: Rect::new(0.0, offset, board, 1.0),
                color: GRID_COLOR,
            });
        }
    }

    fn push_debug_info(&self, commands: &mut Vec<DrawCommand>, snapshot: &Snapshot<'_>, now: DateTime<Local>) {
        let mut lines = vec![format!("Boundary Crosses: {}", snapshot.boundary_cross_count)];
        if let Some(last) = snapshot.last_boundary_cross {
            let secs = (now - last).num_seconds().max(0);
            lines.push(format!("Time since last cross: {}s", secs));
        }
        lines.push(match snapshot.head() {
            Some(head) => format!("Snake Head: ({}, {})", head.x, head.y),
            None => "Snake Head: No snake".to_string(),
        });

        for (i, line) in lines.into_iter().enumerate() {
            commands.push(DrawCommand::Text {
                text: line,
                x: 10.0,
                y: 10.0 + i as f32 * 15.0,
                scale: DEBUG_TEXT_SCALE,
                color: TEXT_COLOR,
            });
        }
    }

    fn push_hud(&self, commands: &mut Vec<DrawCommand>, snapshot: &Snapshot<'_>) {
        let mut text = format!(
            "Score: {} | High Score: {} | Speed: {}ms",
            snapshot.score, snapshot.best_score, snapshot.game_speed_ms
        );
        if snapshot.phase != Phase::Running {
            text.push_str(" | ");
            text.push_str(snapshot.phase.label());
        }

        commands.push(DrawCommand::Text {
            text,
            x: 10.0,
            y: snapshot.tile_count as f32 * self.cell_size + 10.0,
            scale: HUD_TEXT_SCALE,
            color: TEXT_COLOR,
        });
    }

    fn push_overlay(&self, commands: &mut Vec<DrawCommand>, tile_count: i16, title: &str, message: &str) {
        let board = tile_count as f32 * self.cell_size;
        commands.push(DrawCommand::Rect {
            rect: Rect::new(0.0, 0.0, board, board),
            color: OVERLAY_SHADE,
        });

        // Rough centering; the font is not measured here
        let centered_x = |text: &str, scale: f32| (board - text.len() as f32 * scale * 0.5).max(0.0) / 2.0;
        commands.push(DrawCommand::Text {
            text: title.to_string(),
            x: centered_x(title, OVERLAY_TITLE_SCALE),
            y: board / 2.0 - OVERLAY_TITLE_SCALE,
            scale: OVERLAY_TITLE_SCALE,
            color: Color::WHITE,
        });
        commands.push(DrawCommand::Text {
            text: message.to_string(),
            x: centered_x(message, OVERLAY_MESSAGE_SCALE),
            y: board / 2.0 + 10.0,
            scale: OVERLAY_MESSAGE_SCALE,
            color: Color::WHITE,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::overlay::OverlayPresenter;
    use chrono::Duration;

    fn snapshot(snake: &[Position]) -> Snapshot<'_> {
        Snapshot {
            snake,
            food: Position::new(4, 4),
            tile_count: 10,
            boundary_cross_count: 2,
            last_boundary_cross: None,
            score: 30,
            best_score: 50,
            game_speed_ms: 150,
            phase: Phase::Running,
        }
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_snake_then_food_cells() {
        let body = [Position::new(1, 2), Position::new(0, 2)];
        let renderer = BoardRenderer::new(20);
        let commands = renderer.commands(&snapshot(&body), &Overlay::new(), Local::now());

        assert_eq!(
            commands[0],
            DrawCommand::Rect {
                rect: Rect::new(20.0, 40.0, 18.0, 18.0),
                color: HEAD_COLOR
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Rect {
                rect: Rect::new(0.0, 40.0, 18.0, 18.0),
                color: BODY_COLOR
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Rect {
                rect: Rect::new(80.0, 80.0, 18.0, 18.0),
                color: FOOD_COLOR
            }
        );
    }

    #[test]
    fn test_grid_lines_cover_board() {
        let body = [Position::new(1, 2)];
        let commands = BoardRenderer::new(20).commands(&snapshot(&body), &Overlay::new(), Local::now());
        let grid = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == GRID_COLOR))
            .count();

        assert_eq!(grid, 22);
    }

    #[test]
    fn test_debug_and_hud_text() {
        let body = [Position::new(1, 2)];
        let now = Local::now();
        let mut snap = snapshot(&body);
        snap.last_boundary_cross = Some(now - Duration::seconds(3));
        snap.phase = Phase::Paused;

        let commands = BoardRenderer::new(20).commands(&snap, &Overlay::new(), now);
        let texts = texts(&commands);

        assert!(texts.contains(&"Boundary Crosses: 2"));
        assert!(texts.contains(&"Time since last cross: 3s"));
        assert!(texts.contains(&"Snake Head: (1, 2)"));
        assert!(texts.contains(&"Score: 30 | High Score: 50 | Speed: 150ms | Paused"));
    }

    #[test]
    fn test_overlay_drawn_last() {
        let body = [Position::new(1, 2)];
        let mut overlay = Overlay::new();
        overlay.show("Game Over!", "Score: 30");

        let commands = BoardRenderer::new(20).commands(&snapshot(&body), &overlay, Local::now());
        let texts = texts(&commands);

        assert_eq!(&texts[texts.len() - 2..], &["Game Over!", "Score: 30"]);
    }
}
