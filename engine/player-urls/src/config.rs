use crate::error::{PlayerUrlsError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATA_PATH_ENV: &str = "PLAYER_URLS_DATA_PATH";
pub const DISCOVERY_PATH_ENV: &str = "PLAYER_URLS_DISCOVERY_PATH";
pub const PREVIEW_LIMIT_ENV: &str = "PLAYER_URLS_PREVIEW_LIMIT";

/// Configuration shared by the player URL scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Player data file, read and rewritten in place
    pub players_path: PathBuf,

    /// Where the discovery report writes players still needing URLs
    pub discovery_path: PathBuf,

    /// How many discovered players to print
    pub preview_limit: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from("data/players.json"),
            discovery_path: PathBuf::from("players_to_update.json"),
            preview_limit: 10,
        }
    }
}

impl ScriptConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; unset keys keep the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_ENV) {
            config.players_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(DISCOVERY_PATH_ENV) {
            config.discovery_path = PathBuf::from(path);
        }

        if let Some(limit) = lookup(PREVIEW_LIMIT_ENV) {
            config.preview_limit = limit.trim().parse().map_err(|_| {
                PlayerUrlsError::Config(format!("{PREVIEW_LIMIT_ENV} must be a non-negative integer, got '{limit}'"))
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = ScriptConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ScriptConfig::default());
        assert_eq!(config.players_path, PathBuf::from("data/players.json"));
        assert_eq!(config.preview_limit, 10);
    }

    #[test]
    fn test_overrides_applied() {
        let config = ScriptConfig::from_lookup(lookup_from(&[
            (DATA_PATH_ENV, "/tmp/players.json"),
            (DISCOVERY_PATH_ENV, "/tmp/todo.json"),
            (PREVIEW_LIMIT_ENV, " 25 "),
        ]))
        .unwrap();

        assert_eq!(config.players_path, PathBuf::from("/tmp/players.json"));
        assert_eq!(config.discovery_path, PathBuf::from("/tmp/todo.json"));
        assert_eq!(config.preview_limit, 25);
    }

    #[test]
    fn test_invalid_preview_limit() {
        let err = ScriptConfig::from_lookup(lookup_from(&[(PREVIEW_LIMIT_ENV, "ten")])).unwrap_err();
        assert!(matches!(err, PlayerUrlsError::Config(_)));
    }
}
