use common::config::Validate;
use common::games::tictactoe::{
    DEFAULT_REMARKS, DEFAULT_THINKING_DELAY_MAX, DEFAULT_THINKING_DELAY_MIN, RemarkCatalog,
};
use serde::{Deserialize, Serialize};

const MAX_THINKING_DELAY_MS: u32 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    pub thinking_delay_min_ms: u32,
    pub thinking_delay_max_ms: u32,
    pub remarks: Vec<String>,
}

impl BotConfig {
    pub fn remark_catalog(&self) -> RemarkCatalog {
        RemarkCatalog::new(self.remarks.clone())
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_min_ms > self.thinking_delay_max_ms {
            return Err("thinking_delay_min_ms must not exceed thinking_delay_max_ms".to_string());
        }
        if self.thinking_delay_max_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_max_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        if self.remarks.is_empty() {
            return Err("remarks must contain at least one entry".to_string());
        }
        if self.remarks.iter().any(|r| r.trim().is_empty()) {
            return Err("remarks must not contain empty entries".to_string());
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            thinking_delay_min_ms: DEFAULT_THINKING_DELAY_MIN.as_millis() as u32,
            thinking_delay_max_ms: DEFAULT_THINKING_DELAY_MAX.as_millis() as u32,
            remarks: DEFAULT_REMARKS.iter().map(|r| r.to_string()).collect(),
        }
    }
}
