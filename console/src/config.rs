use engine::config::Validate;
use engine::game::GameSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub game: GameSettings,
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            color: true,
        }
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConsoleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_game_settings_propagate() {
        let mut config = ConsoleConfig::default();
        config.game.grid_size = 1;
        assert!(config.validate().is_err());
    }
}
