//! Application configuration with documented defaults
//!
//! Tunables for the session plus the text-generation endpoint settings.
//! Loaded from a TOML file when one is given; every field has a sensible
//! default so the app runs with no config at all.

use crate::core::error::{QuestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shards a new player starts with
    pub starting_shards: u32,

    /// Number of stars in the background field
    ///
    /// Purely cosmetic; larger counts cost redraw time on slow terminals.
    pub star_count: usize,

    /// Month advance per animation tick while the Earth Lab auto-orbit runs
    ///
    /// At the default (0.05), a full year takes 240 ticks.
    pub orbit_step: f64,

    pub llm: LlmSettings,
}

/// Text-generation endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Environment variable holding the API key (never stored in the file)
    pub api_key_env: String,
    pub api_url: String,
    pub model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_shards: 150,
            star_count: 150,
            orbit_step: 0.05,
            llm: LlmSettings::default(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key_env: "LLM_API_KEY".to_string(),
            api_url: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-3-haiku-20240307".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| QuestError::ConfigError(format!("invalid TOML: {e}")))?;
        config.validate().map_err(QuestError::ConfigError)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.orbit_step <= 0.0 || self.orbit_step >= 12.0 {
            return Err(format!(
                "orbit_step ({}) must be in (0, 12)",
                self.orbit_step
            ));
        }
        if self.star_count == 0 {
            return Err("star_count must be positive".to_string());
        }
        if self.llm.api_key_env.is_empty() {
            return Err("llm.api_key_env must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_shards, 150);
        assert_eq!(config.star_count, 150);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
starting_shards = 500

[llm]
model = "claude-3-5-sonnet-20241022"
"#,
        )
        .unwrap();
        assert_eq!(config.starting_shards, 500);
        assert_eq!(config.llm.model, "claude-3-5-sonnet-20241022");
        // Untouched fields keep their defaults.
        assert_eq!(config.star_count, 150);
        assert_eq!(config.llm.api_key_env, "LLM_API_KEY");
    }

    #[test]
    fn test_validate_rejects_bad_orbit_step() {
        let mut config = AppConfig::default();
        config.orbit_step = 0.0;
        assert!(config.validate().is_err());
        config.orbit_step = 12.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_stars() {
        let mut config = AppConfig::default();
        config.star_count = 0;
        assert!(config.validate().is_err());
    }
}
