use chrono::Local;
use ggez::event::EventHandler;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::mint::Point2;
use ggez::{graphics, Context, GameResult};
use wrap_snake::render::{BoardRenderer, DrawCommand, BACKGROUND_COLOR};
use wrap_snake::{GameEngine, InputEvent, JsonScoreStore, Overlay};

pub struct SnakeApp {
    engine: GameEngine<JsonScoreStore, Overlay>,
    renderer: BoardRenderer,
}

impl SnakeApp {
    pub fn new(engine: GameEngine<JsonScoreStore, Overlay>) -> Self {
        let renderer = BoardRenderer::new(engine.config().cell_size);
        Self { engine, renderer }
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        self.engine.advance_frame(ctx.time.delta());
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, BACKGROUND_COLOR);
        let commands = self
            .renderer
            .commands(&self.engine.snapshot(), self.engine.overlay(), Local::now());

        for command in commands {
            match command {
                DrawCommand::Rect { rect, color } => {
                    canvas.draw(
                        &graphics::Mesh::new_rectangle(ctx, graphics::DrawMode::fill(), rect, color)?,
                        graphics::DrawParam::default(),
                    );
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    scale,
                    color,
                } => {
                    let mut text = graphics::Text::new(text);
                    text.set_scale(scale);
                    canvas.draw(
                        &text,
                        graphics::DrawParam::default()
                            .dest(Point2 { x, y })
                            .color(color),
                    );
                }
            }
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(keycode) = input.keycode {
            if keycode == KeyCode::Escape {
                ctx.request_quit();
                return Ok(());
            }
            if let Some(event) = InputEvent::from_keycode(keycode) {
                self.engine.handle(event);
            }
        }
        Ok(())
    }
}
