use common::config::Validate;
use common::games::tictactoe::DEFAULT_ROUND_RESET_DELAY;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RoundConfig {
    pub reset_delay_ms: u32,
}

impl Validate for RoundConfig {
    fn validate(&self) -> Result<(), String> {
        if self.reset_delay_ms < 100 {
            return Err("reset_delay_ms must be at least 100".to_string());
        }
        if self.reset_delay_ms > 60_000 {
            return Err("reset_delay_ms must not exceed 60000".to_string());
        }
        Ok(())
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: DEFAULT_ROUND_RESET_DELAY.as_millis() as u32,
        }
    }
}
