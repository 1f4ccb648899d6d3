//! Configuration settings for Vev.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub llm: LlmSettings,
    pub search: SearchSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// LLM settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Chat model to use.
    pub model: String,
    /// Maximum tool-call round trips per user message.
    pub max_tool_hops: usize,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tool_hops: 4,
        }
    }
}

/// Web search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Number of results requested per search.
    pub num_results: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { num_results: 3 }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::VevError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vev")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.llm.model, "gpt-4o-mini");
        assert_eq!(settings.llm.max_tool_hops, 4);
        assert_eq!(settings.search.num_results, 3);
        assert_eq!(settings.general.log_level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [llm]
            model = "gpt-4o"
            "#,
        )
        .unwrap();

        assert_eq!(settings.llm.model, "gpt-4o");
        // Unspecified sections fall back to defaults
        assert_eq!(settings.llm.max_tool_hops, 4);
        assert_eq!(settings.search.num_results, 3);
    }

    #[test]
    fn test_parse_full_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [general]
            log_level = "debug"

            [llm]
            model = "gpt-4.1"
            max_tool_hops = 2

            [search]
            num_results = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.general.log_level, "debug");
        assert_eq!(settings.llm.model, "gpt-4.1");
        assert_eq!(settings.llm.max_tool_hops, 2);
        assert_eq!(settings.search.num_results, 5);
    }
}
