use crate::game::Position;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Board and pacing parameters. Any field missing from a config file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub tile_count: i16,
    /// Pixels per cell
    pub cell_size: i16,
    pub start: Position,
    pub initial_food: Position,
    pub initial_speed_ms: u64,
    pub min_speed_ms: u64,
    pub speed_step_ms: u64,
    /// Score multiple at which the game speeds up
    pub speed_threshold: u32,
    pub food_score: u32,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            cell_size: 20,
            start: Position::new(10, 10),
            initial_food: Position::new(15, 15),
            initial_speed_ms: 150,
            min_speed_ms: 50,
            speed_step_ms: 10,
            speed_threshold: 50,
            food_score: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_count < 2 {
            bail!("tile_count must be at least 2, got {}", self.tile_count);
        }
        if self.cell_size < 4 {
            bail!("cell_size must be at least 4 pixels, got {}", self.cell_size);
        }
        if !self.start.in_bounds(self.tile_count) {
            bail!("start {:?} lies outside a {} tile board", self.start, self.tile_count);
        }
        if !self.initial_food.in_bounds(self.tile_count) {
            bail!(
                "initial_food {:?} lies outside a {} tile board",
                self.initial_food,
                self.tile_count
            );
        }
        if self.initial_food == self.start {
            bail!("initial_food must not coincide with the start cell");
        }
        if self.min_speed_ms == 0 {
            bail!("min_speed_ms must be positive");
        }
        if self.initial_speed_ms < self.min_speed_ms {
            bail!(
                "initial_speed_ms ({}) is below min_speed_ms ({})",
                self.initial_speed_ms,
                self.min_speed_ms
            );
        }
        if self.speed_threshold == 0 || self.food_score == 0 {
            bail!("speed_threshold and food_score must be positive");
        }
        Ok(())
    }

    /// Side length of the board in pixels.
    pub fn board_pixels(&self) -> f32 {
        self.tile_count as f32 * self.cell_size as f32
    }
}
