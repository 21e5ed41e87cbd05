//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Game configuration structure for TOML files. Every field is optional;
/// omitted fields keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameConfigData {
    pub winning_score: Option<u32>,
}

impl GameConfigData {
    /// Applies the overrides on top of the default configuration.
    pub fn into_config(self) -> GameConfig {
        let mut config = GameConfig::default();
        if let Some(winning_score) = self.winning_score {
            config.winning_score = winning_score.max(1);
        }
        config
    }
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load game configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let data: GameConfigData = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse game config TOML: {}", e))?;

        Ok(data.into_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn overrides_the_winning_score() {
        let data: GameConfigData = toml::from_str("winning_score = 5").expect("parse");
        assert_eq!(data.into_config().winning_score, 5);
    }

    #[test]
    fn empty_file_keeps_defaults() {
        let data: GameConfigData = toml::from_str("").expect("parse");
        assert_eq!(
            data.into_config().winning_score,
            GameConfig::DEFAULT_WINNING_SCORE
        );
    }

    #[test]
    fn zero_threshold_is_raised_to_one() {
        let data: GameConfigData = toml::from_str("winning_score = 0").expect("parse");
        assert_eq!(data.into_config().winning_score, 1);
    }

    #[test]
    fn loads_a_config_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"winning_score = 3\n").expect("write");

        let config = ConfigLoader::load(file.path()).expect("load");
        assert_eq!(config.winning_score, 3);
    }
}
