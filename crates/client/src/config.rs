//! Client runtime configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap the terminal client.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// External question catalog (RON). Falls back to the embedded one.
    pub questions_file: Option<PathBuf>,
    /// Game configuration overrides (TOML).
    pub config_file: Option<PathBuf>,
    /// Fixed RNG seed for reproducible question sequences.
    pub seed: Option<u64>,
    /// Log directory override.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GEOMATH_QUESTIONS_FILE` - Path to a RON question catalog (default: embedded)
    /// - `GEOMATH_CONFIG_FILE` - Path to a TOML game config (default: built-in rules)
    /// - `GEOMATH_SEED` - Fixed RNG seed (default: derived from the clock)
    /// - `GEOMATH_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.questions_file = env::var("GEOMATH_QUESTIONS_FILE").ok().map(PathBuf::from);
        config.config_file = env::var("GEOMATH_CONFIG_FILE").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("GEOMATH_SEED");
        config.log_dir = env::var("GEOMATH_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
