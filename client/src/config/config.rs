use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::SelfplayConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Start the next game right away after a tie instead of asking.
    #[serde(default = "default_auto_reset_on_draw")]
    pub auto_reset_on_draw: bool,
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
    #[serde(default)]
    pub selfplay: SelfplayConfig,
}

fn default_auto_reset_on_draw() -> bool {
    true
}

fn default_show_hints() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.selfplay.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_reset_on_draw: default_auto_reset_on_draw(),
            show_hints: default_show_hints(),
            selfplay: SelfplayConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpponentKind;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            auto_reset_on_draw: false,
            show_hints: false,
            selfplay: SelfplayConfig {
                games: 12,
                opponent: OpponentKind::Perfect,
                seed: Some(77),
            },
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(file_path.clone());

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("auto_reset_on_draw: false\n").unwrap();
        assert!(!config.auto_reset_on_draw);
        assert!(config.show_hints);
        assert_eq!(config.selfplay, SelfplayConfig::default());

        let config: Config = serializer.deserialize("show_hints: false\n").unwrap();
        assert!(config.auto_reset_on_draw);
        assert!(!config.show_hints);
    }

    #[test]
    fn test_partial_config_file_loads_through_manager() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content("show_hints: false\n").unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert!(config.auto_reset_on_draw);
        assert!(!config.show_hints);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            auto_reset_on_draw: true
            selfplay:
              games: 0
              opponent: Random
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config, _> = ConfigManager::from_yaml_file(file_path);
        let mut config = Config::default();
        config.selfplay.games = 0;
        assert!(manager.set_config(&config).is_err());
    }
}
