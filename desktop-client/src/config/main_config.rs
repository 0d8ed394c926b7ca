use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::OpponentMode;

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

/// User preferences. Game state and scores are never written here.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub opponent: OpponentMode,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        Ok(())
    }
}
