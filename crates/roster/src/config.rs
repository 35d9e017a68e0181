//! Roster configuration structures and loaders.
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use score_core::ScoreConfig;

use crate::error::{Result, RosterError};
use crate::model::HistoryRetention;

/// Configuration for the roster store and scoring.
#[derive(Clone, Debug, PartialEq)]
pub struct RosterConfig {
    /// Roster document path. `None` means the platform data directory.
    pub data_file: Option<PathBuf>,
    /// History entries kept per character.
    pub history_limit: usize,
    /// History entries older than this many days are dropped.
    pub history_days: Option<u32>,
    /// Optional TOML file overriding score balance values.
    pub score_config: Option<PathBuf>,
    /// Server label given to newly added characters.
    pub server: String,
    /// Directory for log files. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl RosterConfig {
    pub const DEFAULT_HISTORY_LIMIT: usize = 30;
    pub const DEFAULT_SERVER: &'static str = "unknown";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_DATA_FILE` - Roster JSON path (default: platform data dir)
    /// - `ROSTER_HISTORY_LIMIT` - History entries per character (default: 30)
    /// - `ROSTER_HISTORY_DAYS` - Also drop history older than N days (default: unset)
    /// - `ROSTER_SCORE_CONFIG` - TOML file with `ScoreConfig` overrides
    /// - `ROSTER_SERVER` - Server label for new characters (default: "unknown")
    /// - `ROSTER_LOG_DIR` - Also write logs to this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("ROSTER_DATA_FILE") {
            config.data_file = Some(path);
        }

        if let Some(limit) = read_env::<usize>("ROSTER_HISTORY_LIMIT") {
            config.history_limit = limit.max(1);
        }

        if let Some(days) = read_env::<u32>("ROSTER_HISTORY_DAYS")
            && days > 0
        {
            config.history_days = Some(days);
        }

        if let Some(path) = read_env::<PathBuf>("ROSTER_SCORE_CONFIG") {
            config.score_config = Some(path);
        }

        if let Some(server) = read_env::<String>("ROSTER_SERVER")
            && !server.trim().is_empty()
        {
            config.server = server;
        }

        if let Some(dir) = read_env::<PathBuf>("ROSTER_LOG_DIR") {
            config.log_dir = Some(dir);
        }

        config
    }

    /// History retention described by `history_limit` and `history_days`.
    pub fn history_retention(&self) -> HistoryRetention {
        let retention = HistoryRetention::entries(self.history_limit);
        match self.history_days {
            Some(days) => retention.with_max_age(TimeDelta::days(i64::from(days))),
            None => retention,
        }
    }

    /// Score balance to use: the configured TOML file, or the defaults.
    pub fn load_score_config(&self) -> Result<ScoreConfig> {
        match &self.score_config {
            Some(path) => ScoreConfigLoader::load(path),
            None => Ok(ScoreConfig::default()),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            history_days: None,
            score_config: None,
            server: Self::DEFAULT_SERVER.to_string(),
            log_dir: None,
        }
    }
}

/// Loader for score balance overrides from TOML files.
///
/// Omitted keys keep their default value.
pub struct ScoreConfigLoader;

impl ScoreConfigLoader {
    pub fn load(path: &Path) -> Result<ScoreConfig> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::info!("Loaded score config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<ScoreConfig> {
        let config: ScoreConfig = toml::from_str(content)
            .map_err(|e| RosterError::Config(format!("failed to parse score config TOML: {e}")))?;

        config.validate()?;
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_core::ValidationError;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ScoreConfigLoader::parse("weapon_amp_efficiency = 0.8\n").unwrap();
        assert_eq!(config.weapon_amp_efficiency, 0.8);
        assert_eq!(config.cooldown_efficiency, ScoreConfig::DEFAULT_COOLDOWN_EFFICIENCY);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ScoreConfigLoader::parse("weapon_amp_efficiency = \"high\"").unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let err = ScoreConfigLoader::parse("rank_weight_max = inf").unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::InvalidConfig {
                field: "rank_weight_max"
            })
        ));
    }

    #[test]
    fn out_of_range_value_is_rejected() {
        let err = ScoreConfigLoader::parse("critical_base_multiplier = 0.0").unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::InvalidConfig {
                field: "critical_base_multiplier"
            })
        ));
    }

    #[test]
    fn history_days_become_a_max_age() {
        let config = RosterConfig {
            history_limit: 10,
            history_days: Some(30),
            ..RosterConfig::default()
        };
        let retention = config.history_retention();
        assert_eq!(retention.max_entries, 10);
        assert_eq!(retention.max_age, Some(TimeDelta::days(30)));
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = RosterConfig::default();
        assert_eq!(config.history_limit, 30);
        assert_eq!(config.history_retention(), HistoryRetention::entries(30));
        assert!(config.data_file.is_none());
        assert_eq!(config.load_score_config().unwrap(), ScoreConfig::default());
    }
}
