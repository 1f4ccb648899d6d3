//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, mut settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            apply_setting(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
        }

        ConfigAction::Edit => {
            let config_path = Settings::default_config_path();

            // Create default config if it doesn't exist
            if !config_path.exists() {
                settings.save()?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            // Try to open in editor
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply a dotted-key assignment to the settings.
fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "general.log_level" => settings.general.log_level = value.to_string(),
        "llm.model" => settings.llm.model = value.to_string(),
        "llm.max_tool_hops" => {
            settings.llm.max_tool_hops = value
                .parse()
                .map_err(|_| anyhow::anyhow!("'{}' is not a valid number for {}", value, key))?;
        }
        "search.num_results" => {
            settings.search.num_results = value
                .parse()
                .map_err(|_| anyhow::anyhow!("'{}' is not a valid number for {}", value, key))?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown configuration key: {}. Known keys: general.log_level, \
                 llm.model, llm.max_tool_hops, search.num_results",
                key
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting_model() {
        let mut settings = Settings::default();
        apply_setting(&mut settings, "llm.model", "gpt-4o").unwrap();
        assert_eq!(settings.llm.model, "gpt-4o");
    }

    #[test]
    fn test_apply_setting_numeric() {
        let mut settings = Settings::default();
        apply_setting(&mut settings, "llm.max_tool_hops", "2").unwrap();
        assert_eq!(settings.llm.max_tool_hops, 2);

        apply_setting(&mut settings, "search.num_results", "5").unwrap();
        assert_eq!(settings.search.num_results, 5);
    }

    #[test]
    fn test_apply_setting_rejects_bad_number() {
        let mut settings = Settings::default();
        assert!(apply_setting(&mut settings, "llm.max_tool_hops", "lots").is_err());
    }

    #[test]
    fn test_apply_setting_rejects_unknown_key() {
        let mut settings = Settings::default();
        let err = apply_setting(&mut settings, "llm.temperature", "0.7").unwrap_err();
        assert!(err.to_string().contains("Unknown configuration key"));
    }
}
