use std::path::PathBuf;
use std::time::Duration;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{DriverSettings, GameMode};
use common::log_warn;
use serde::{Deserialize, Serialize};

use super::{BotConfig, PlayersConfig, RoundConfig};

const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_config_path))
}

/// Loads the config and records the mode about to be played as `last_mode`.
/// A config that fails to load is replaced by defaults in memory only, so the
/// file on disk is left for the user to fix.
pub fn load_config_with_mode(
    config_manager: &ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>,
    requested_mode: Option<GameMode>,
) -> (Config, GameMode) {
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Failed to load config, using defaults: {}", e);
            return (Config::default(), requested_mode.unwrap_or(GameMode::HumanVsHuman));
        }
    };

    let mode = requested_mode
        .or(config.last_mode)
        .unwrap_or(GameMode::HumanVsHuman);

    if config.last_mode != Some(mode) {
        config.last_mode = Some(mode);
        if let Err(e) = config_manager.set_config(&config) {
            log_warn!("Failed to save config: {}", e);
        }
    }

    (config, mode)
}

fn get_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub players: PlayersConfig,
    pub bot: BotConfig,
    pub round: RoundConfig,
    pub last_mode: Option<GameMode>,
}

impl Config {
    pub fn to_driver_settings(&self) -> DriverSettings {
        DriverSettings {
            thinking_delay_min: Duration::from_millis(self.bot.thinking_delay_min_ms as u64),
            thinking_delay_max: Duration::from_millis(self.bot.thinking_delay_max_ms as u64),
            round_reset_delay: Duration::from_millis(self.round.reset_delay_ms as u64),
            remarks: self.bot.remark_catalog(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.players.validate()?;
        self.bot.validate()?;
        self.round.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{DEFAULT_REMARKS, DEFAULT_ROUND_RESET_DELAY, DEFAULT_THINKING_DELAY_MIN};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        dbg!(&file_path);
        let content_provider = FileContentConfigProvider::new(file_path);

        let serialized_string = serializer.serialize(&default_config).unwrap();
        assert!(content_provider.set_config_content(&serialized_string).is_ok());

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_last_mode_is_saved_through_manager() {
        let config = Config {
            last_mode: Some(GameMode::HumanVsBot),
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new());

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap().last_mode, Some(GameMode::HumanVsBot));
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let content_provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            players:
              player_x: ""
              player_o: "Player 2"
              bot_label: "Bot"
            bot:
              thinking_delay_min_ms: 1000
              thinking_delay_max_ms: 1800
              remarks: ["Hmm..."]
            round:
              reset_delay_ms: 2500
            last_mode: null
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path);
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_config_file_is_not_overwritten() {
        let invalid_config_content = "players: { player_x: \"\" }\n";
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone().into()));
        let (config, mode) = load_config_with_mode(&manager, Some(GameMode::HumanVsBot));
        assert_eq!(mode, GameMode::HumanVsBot);
        assert_eq!(config, Config::default());

        let on_disk = FileContentConfigProvider::new(file_path).get_config_content().unwrap();
        assert_eq!(on_disk.as_deref(), Some(invalid_config_content));
    }

    #[test]
    fn test_mode_is_remembered_between_runs() {
        let file_path = get_temp_file_path();

        let manager = get_config_manager(Some(file_path.clone().into()));
        let (_, mode) = load_config_with_mode(&manager, Some(GameMode::HumanVsBot));
        assert_eq!(mode, GameMode::HumanVsBot);

        let manager = get_config_manager(Some(file_path.into()));
        let (config, mode) = load_config_with_mode(&manager, None);
        assert_eq!(mode, GameMode::HumanVsBot);
        assert_eq!(config.last_mode, Some(GameMode::HumanVsBot));
    }

    #[test]
    fn test_inverted_thinking_delay_is_rejected() {
        let mut config = Config::default();
        config.bot.thinking_delay_min_ms = 2000;
        config.bot.thinking_delay_max_ms = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_thinking_delay_upper_bound() {
        let mut config = Config::default();
        config.bot.thinking_delay_max_ms = 10_001;
        assert!(config.validate().is_err());
        config.bot.thinking_delay_max_ms = 10_000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reset_delay_bounds() {
        let mut config = Config::default();
        config.round.reset_delay_ms = 99;
        assert!(config.validate().is_err());
        config.round.reset_delay_ms = 60_001;
        assert!(config.validate().is_err());
        config.round.reset_delay_ms = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_remarks_must_be_present_and_non_empty() {
        let mut config = Config::default();
        config.bot.remarks.clear();
        assert!(config.validate().is_err());
        config.bot.remarks = vec!["Hmm...".to_string(), "  ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_driver_settings_follow_config() {
        let settings = Config::default().to_driver_settings();
        assert_eq!(settings.thinking_delay_min, DEFAULT_THINKING_DELAY_MIN);
        assert_eq!(settings.round_reset_delay, DEFAULT_ROUND_RESET_DELAY);
        assert_eq!(settings.remarks.remarks().len(), DEFAULT_REMARKS.len());
    }
}
