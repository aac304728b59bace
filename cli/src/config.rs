use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

pub type CliConfigManager = ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&str>) -> CliConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or(CONFIG_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CliConfig {
    /// Fixed seed for the opening rules; random when absent.
    pub seed: Option<u64>,
    pub use_log_prefix: bool,
    pub selfplay_games: u32,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.selfplay_games == 0 || self.selfplay_games > 1000 {
            return Err(format!(
                "selfplay_games must be between 1 and 1000, got {}",
                self.selfplay_games
            ));
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            use_log_prefix: false,
            selfplay_games: 1,
        }
    }
}
