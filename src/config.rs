use crate::errors::ConfigError;

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub timespent_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    /// Base URL of the user service; `watch` is appended as a path segment.
    pub reward_url: String,
    pub request_timeout_ms: u64,
    pub round_delay_ms: u64,
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EpsilonGreedyConfig {
    pub n_arms: usize,
    pub n_picks: usize,
    pub epsilon: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UcbConfig {
    pub n_arms: usize,
    pub n_picks: usize,
}

/// One optional section per policy variant, the agent picks one by name.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BanditsConfig {
    pub epsilon_greedy: Option<EpsilonGreedyConfig>,
    pub ucb: Option<UcbConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct WidgetPreference {
    pub mean: f64,
    pub sigma: f64,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub agent: AgentConfig,
    pub bandits: BanditsConfig,
    pub preferences: HashMap<String, WidgetPreference>,
}

impl AppConfig {
    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(builder.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const CONFIG: &str = r#"
        [logging]
        level = "info"

        [server]
        host = "127.0.0.1"
        port = 8000

        [agent]
        reward_url = "http://127.0.0.1:8000/"
        request_timeout_ms = 1000
        round_delay_ms = 500

        [bandits.ucb]
        n_arms = 5
        n_picks = 2

        [preferences.0]
        mean = 1.0
        sigma = 0.5
    "#;

    fn parse(raw: &str) -> Result<AppConfig, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    #[test]
    fn parse_config() {
        let config = parse(CONFIG).unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.agent.round_delay(), Duration::from_millis(500));
        assert_eq!(config.agent.seed, None);
        assert!(config.bandits.epsilon_greedy.is_none());
        assert_eq!(
            config.bandits.ucb,
            Some(UcbConfig {
                n_arms: 5,
                n_picks: 2
            })
        );
        assert_eq!(config.preferences.get("0").map(|p| p.sigma), Some(0.5));
    }

    #[test]
    fn missing_key() {
        let raw = CONFIG.replace("n_picks = 2", "");
        assert!(matches!(parse(&raw), Err(ConfigError::Source(_))));
    }

    #[test]
    fn unknown_key() {
        let raw = CONFIG.replace("n_picks = 2", "n_picks = 2\nalpha = 1.0");
        assert!(matches!(parse(&raw), Err(ConfigError::Source(_))));
    }
}
