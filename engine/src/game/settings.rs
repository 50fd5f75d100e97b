use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Validate;
use super::grid::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use super::joystick::{DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};

pub const DEFAULT_GRID_SIZE: usize = 8;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub grid_size: usize,
    pub tick_interval_ms: u64,
    pub joystick_low: u16,
    pub joystick_high: u16,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            joystick_low: DEFAULT_LOW_THRESHOLD,
            joystick_high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl GameSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < MIN_GRID_SIZE || self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "Grid size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.joystick_low >= self.joystick_high {
            return Err("Joystick low threshold must be below the high threshold".to_string());
        }
        Ok(())
    }
}
