use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::discover::RankingConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    /// Directory with the static frontend, served as fallback.
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// Empty key is tolerated: movie requests are skipped entirely.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

fn default_port() -> String {
    "3000".to_string()
}

fn default_language() -> String {
    "fr-FR".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

impl Config {
    /// Load the YAML config. A missing file is not an error: everything has
    /// a default and the API key can come from the environment alone.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let mut config = if Path::new(path).exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;
            serde_yaml::from_str(&content)
                .map_err(|e| ConfigError::ParseError(path.to_string(), e))?
        } else {
            Config::default()
        };

        if let Ok(api_key) = std::env::var("TMDB_API_KEY") {
            config.tmdb.api_key = api_key;
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.listen.port, "3000");
        assert_eq!(config.tmdb.language, "fr-FR");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert!(config.tmdb.api_key.is_empty());
        assert_eq!(config.ranking.prior_weight, 3000.0);
        assert_eq!(config.ranking.global_average, 6.5);
    }

    #[test]
    fn test_partial_ranking_overrides() {
        let yaml = r#"
ranking:
  global_average: 7.0
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.ranking.global_average, 7.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.ranking.vote_count_floor, 3000);
        assert_eq!(config.ranking.allowed_countries.len(), 8);
    }

    #[test]
    fn test_tmdb_section() {
        let yaml = r#"
tmdb:
  api_key: "abc"
  language: "en-US"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tmdb.api_key, "abc");
        assert_eq!(config.tmdb.language, "en-US");
        assert_eq!(
            config.tmdb.image_base_url,
            "https://image.tmdb.org/t/p/w500"
        );
    }
}
