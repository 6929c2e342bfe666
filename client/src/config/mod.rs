mod bot_config;
mod config;
mod players_config;
mod round_config;

pub use bot_config::BotConfig;
pub use config::{Config, get_config_manager, load_config_with_mode};
pub use players_config::PlayersConfig;
pub use round_config::RoundConfig;
