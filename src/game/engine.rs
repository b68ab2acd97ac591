use super::{
    food::place_food,
    scheduler::TickScheduler,
    speed::SpeedRamp,
    state::{Direction, Phase, Position, Snapshot, Velocity},
};
use crate::config::GameConfig;
use crate::input::InputEvent;
use crate::overlay::OverlayPresenter;
use crate::score::ScoreStore;
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const IDLE_TITLE: &str = "Snake Game";
const IDLE_MESSAGE: &str = "Press Space to start";
const GAME_OVER_TITLE: &str = "Game Over!";
const BOARD_FULL_TITLE: &str = "You won!";

/// Owns one round of snake and everything that outlives it (best score, collaborators).
pub struct GameEngine<S: ScoreStore, O: OverlayPresenter> {
    config: GameConfig,
    ramp: SpeedRamp,
    rng: ChaCha8Rng,
    scheduler: TickScheduler,
    phase: Phase,
    /// Head first, never empty
    snake: Vec<Position>,
    velocity: Velocity,
    /// Velocity used by the most recent move, the reference for reversal checks
    moved: Velocity,
    food: Position,
    score: u32,
    best_score: u32,
    game_speed_ms: u64,
    boundary_cross_count: u32,
    last_boundary_cross: Option<DateTime<Local>>,
    store: S,
    overlay: O,
}

impl<S: ScoreStore, O: OverlayPresenter> GameEngine<S, O> {
    /// Build an engine in the Idle phase. `config` is expected to have passed `validate()`.
    pub fn new(config: GameConfig, mut store: S, mut overlay: O) -> Self {
        let best_score = store.load().unwrap_or_else(|e| {
            warn!("Failed to load best score, starting from 0: {:#}", e);
            0
        });
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        overlay.show(IDLE_TITLE, IDLE_MESSAGE);

        Self {
            ramp: SpeedRamp::from_config(&config),
            rng,
            scheduler: TickScheduler::new(),
            phase: Phase::Idle,
            snake: vec![config.start],
            velocity: Velocity::ZERO,
            moved: Velocity::ZERO,
            food: config.initial_food,
            score: 0,
            best_score,
            game_speed_ms: config.initial_speed_ms,
            boundary_cross_count: 0,
            last_boundary_cross: None,
            store,
            overlay,
            config,
        }
    }

    pub fn handle(&mut self, event: InputEvent) {
        if let Some(direction) = event.direction() {
            self.apply_direction(direction);
            return;
        }

        match event {
            InputEvent::TogglePauseOrStart => match self.phase {
                Phase::Idle | Phase::Over => self.start(),
                Phase::Running | Phase::Paused => self.toggle_pause(),
            },
            InputEvent::Restart => self.restart(),
            _ => {}
        }
    }

    /// Steer, unless the request would reverse the snake onto itself.
    pub fn apply_direction(&mut self, direction: Direction) {
        if matches!(self.phase, Phase::Paused | Phase::Over) {
            return;
        }

        // Both the last executed move and the pending turn guard against reversal
        let requested = Velocity::from(direction);
        if !self.moved.is_opposite(requested) && !self.velocity.is_opposite(requested) {
            self.velocity = requested;
        }
    }

    pub fn start(&mut self) {
        match self.phase {
            Phase::Running | Phase::Paused => return,
            Phase::Over => self.reset(),
            Phase::Idle => {}
        }

        if self.velocity.is_zero() {
            self.velocity = Direction::Right.into();
        }
        self.phase = Phase::Running;
        self.scheduler.arm();
        self.overlay.hide();
        info!("Game started at {:?}, interval {}ms", self.head(), self.game_speed_ms);
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                self.scheduler.disarm();
                info!("Game paused");
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                self.scheduler.arm();
                self.overlay.hide();
                info!("Game resumed");
            }
            Phase::Idle | Phase::Over => {}
        }
    }

    /// Feed whole milliseconds since the previous call. Returns true if the board advanced.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        self.advance_frame(Duration::from_millis(elapsed_ms))
    }

    /// Same as [`tick`](Self::tick) but keeps sub-millisecond frame time.
    pub fn advance_frame(&mut self, elapsed: Duration) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let interval = Duration::from_millis(self.game_speed_ms);
        if !self.scheduler.advance(elapsed, interval) {
            return false;
        }

        self.update();
        true
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.scheduler.disarm();
        self.snake = vec![self.config.start];
        self.velocity = Velocity::ZERO;
        self.moved = Velocity::ZERO;
        self.score = 0;
        self.game_speed_ms = self.config.initial_speed_ms;
        self.food = place_food(&mut self.rng, self.config.tile_count, &self.snake)
            .unwrap_or(self.config.initial_food);
        self.overlay.show(IDLE_TITLE, IDLE_MESSAGE);
        info!("Game reset");
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    fn update(&mut self) {
        if self.velocity.is_zero() {
            return;
        }

        let (new_head, crossed) = self
            .head()
            .stepped_wrapping(self.velocity, self.config.tile_count);
        self.moved = self.velocity;

        if crossed {
            self.boundary_cross_count += 1;
            self.last_boundary_cross = Some(Local::now());
            debug!(
                "Boundary crossing #{} completed, head now at {:?}",
                self.boundary_cross_count, new_head
            );
        }

        // Checked against the pre-move body, tail included
        if self.snake.contains(&new_head) {
            self.game_over();
            return;
        }

        self.snake.insert(0, new_head);

        if new_head == self.food {
            self.score += self.config.food_score;
            self.game_speed_ms = self.ramp.after_score(self.game_speed_ms, self.score);

            match place_food(&mut self.rng, self.config.tile_count, &self.snake) {
                Some(food) => {
                    debug!("Food placed at {:?}", food);
                    self.food = food;
                }
                None => self.finish(BOARD_FULL_TITLE),
            }
        } else {
            self.snake.pop();
        }
    }

    fn game_over(&mut self) {
        self.finish(GAME_OVER_TITLE);
    }

    fn finish(&mut self, title: &str) {
        self.phase = Phase::Over;
        self.scheduler.disarm();

        if self.score > self.best_score {
            self.best_score = self.score;
            if let Err(e) = self.store.save(self.best_score) {
                warn!("Failed to save best score {}: {:#}", self.best_score, e);
            }
        }

        self.overlay.show(title, &format!("Score: {}", self.score));
        info!(
            "{} score {}, best {}, length {}",
            title,
            self.score,
            self.best_score,
            self.snake.len()
        );
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            tile_count: self.config.tile_count,
            boundary_cross_count: self.boundary_cross_count,
            last_boundary_cross: self.last_boundary_cross,
            score: self.score,
            best_score: self.best_score,
            game_speed_ms: self.game_speed_ms,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snake(&self) -> &[Position] {
        &self.snake
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn game_speed_ms(&self) -> u64 {
        self.game_speed_ms
    }

    pub fn boundary_cross_count(&self) -> u32 {
        self.boundary_cross_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
