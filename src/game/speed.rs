use crate::config::GameConfig;

/// Tick interval progression: every time the score lands on a multiple of
/// `threshold` the interval shrinks by `step_ms`, never below `min_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRamp {
    pub initial_ms: u64,
    pub min_ms: u64,
    pub step_ms: u64,
    pub threshold: u32,
}

impl SpeedRamp {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            initial_ms: config.initial_speed_ms,
            min_ms: config.min_speed_ms,
            step_ms: config.speed_step_ms,
            threshold: config.speed_threshold,
        }
    }

    /// Interval to use after the score changed to `score`.
    pub fn after_score(&self, current_ms: u64, score: u32) -> u64 {
        if score > 0 && score % self.threshold == 0 {
            current_ms.saturating_sub(self.step_ms).max(self.min_ms)
        } else {
            current_ms
        }
    }
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
