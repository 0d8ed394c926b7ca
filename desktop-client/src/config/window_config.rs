use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

pub const MIN_WINDOW_SIZE: f32 = 240.0;
pub const MAX_WINDOW_SIZE: f32 = 4096.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.width) {
            return Err(format!(
                "Window width must be between {} and {}, got {}",
                MIN_WINDOW_SIZE, MAX_WINDOW_SIZE, self.width
            ));
        }
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.height) {
            return Err(format!(
                "Window height must be between {} and {}, got {}",
                MIN_WINDOW_SIZE, MAX_WINDOW_SIZE, self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}
