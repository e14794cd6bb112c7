//! Runtime configuration from environment variables and the command line.
//!
//! - `CARDINAL_LEVELS`: level file path (default: "levels/default.toml")
//! - `CARDINAL_START_LEVEL`: 1-based level to start at (default: 1)
//! - `CARDINAL_LOG_DIR`: directory for `cardinal-chains.log` (default: "logs")
//! - `CARDINAL_LOG_DISABLED`: set to "1" or "true" to disable file logging
//!
//! A positional command-line argument overrides `CARDINAL_LEVELS`.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LEVELS_PATH: &str = "levels/default.toml";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub levels_path: PathBuf,
    /// 1-based, as shown to the player.
    pub start_level: usize,
    pub log: LogConfig,
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            levels_path: PathBuf::from(DEFAULT_LEVELS_PATH),
            start_level: 1,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(path) = read("CARDINAL_LEVELS") {
            config.levels_path = PathBuf::from(path);
        }
        if let Some(level) = read("CARDINAL_START_LEVEL").and_then(|s| s.parse::<usize>().ok()) {
            config.start_level = level.max(1);
        }
        if let Some(dir) = read("CARDINAL_LOG_DIR") {
            config.log.dir = PathBuf::from(dir);
        }
        if let Some(disabled) = read("CARDINAL_LOG_DISABLED") {
            config.log.enabled = !(disabled == "1" || disabled.eq_ignore_ascii_case("true"));
        }

        config
    }

    /// Apply command-line arguments (program name already stripped).
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(path) = args.into_iter().find(|arg| !arg.starts_with('-')) {
            self.levels_path = PathBuf::from(path);
        }
        self
    }

    /// Catalog index of the start level
    pub fn start_index(&self) -> usize {
        self.start_level.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.start_index(), 0);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("CARDINAL_LEVELS", "puzzles.toml"),
            ("CARDINAL_START_LEVEL", "3"),
            ("CARDINAL_LOG_DIR", "/tmp/cc"),
            ("CARDINAL_LOG_DISABLED", "TRUE"),
        ]));
        assert_eq!(config.levels_path, PathBuf::from("puzzles.toml"));
        assert_eq!(config.start_index(), 2);
        assert_eq!(config.log.dir, PathBuf::from("/tmp/cc"));
        assert!(!config.log.enabled);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("CARDINAL_START_LEVEL", "zero"),
            ("CARDINAL_LEVELS", "   "),
        ]));
        assert_eq!(config.start_level, 1);
        assert_eq!(config.levels_path, PathBuf::from(DEFAULT_LEVELS_PATH));

        let config = Config::from_lookup(lookup(&[("CARDINAL_START_LEVEL", "0")]));
        assert_eq!(config.start_level, 1);
    }

    #[test]
    fn positional_argument_wins() {
        let config = Config::from_lookup(lookup(&[("CARDINAL_LEVELS", "env.toml")]))
            .with_args(vec!["--verbose".to_string(), "cli.toml".to_string()]);
        assert_eq!(config.levels_path, PathBuf::from("cli.toml"));
    }
}
