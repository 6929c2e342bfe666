use common::config::Validate;
use common::games::tictactoe::{DEFAULT_BOT_LABEL, DEFAULT_PLAYER_O_LABEL, DEFAULT_PLAYER_X_LABEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayersConfig {
    pub player_x: String,
    pub player_o: String,
    pub bot_label: String,
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        for (field, label) in [
            ("player_x", &self.player_x),
            ("player_o", &self.player_o),
            ("bot_label", &self.bot_label),
        ] {
            if label.trim().is_empty() {
                return Err(format!("{} must not be empty", field));
            }
        }
        Ok(())
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            player_x: DEFAULT_PLAYER_X_LABEL.to_string(),
            player_o: DEFAULT_PLAYER_O_LABEL.to_string(),
            bot_label: DEFAULT_BOT_LABEL.to_string(),
        }
    }
}
