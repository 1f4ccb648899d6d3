//! API credential loading.
//!
//! Credentials are read from the environment exactly once at startup and held
//! immutably for the life of the process. A missing credential is a fatal
//! configuration error reported before any network activity.

use crate::error::{Result, VevError};

/// Environment variable holding the LLM API key.
pub const LLM_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the web search API key.
pub const SEARCH_API_KEY_VAR: &str = "GOOGLE_SEARCH_API_KEY";

/// Environment variable holding the search engine identifier.
pub const SEARCH_ENGINE_ID_VAR: &str = "GOOGLE_CSE_ID";

/// All environment variables the agent requires, in reporting order.
pub fn credential_vars() -> [&'static str; 3] {
    [LLM_API_KEY_VAR, SEARCH_API_KEY_VAR, SEARCH_ENGINE_ID_VAR]
}

/// Credentials for the LLM service.
#[derive(Debug, Clone)]
pub struct LlmCredentials {
    pub api_key: String,
}

/// Credentials for the web search service.
#[derive(Debug, Clone)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

/// All credentials the agent needs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub llm: LlmCredentials,
    pub search: SearchCredentials,
}

impl Credentials {
    /// Load all credentials from the environment.
    ///
    /// Fails with a single error naming every missing variable, so a user can
    /// fix their environment in one pass.
    pub fn from_env() -> Result<Self> {
        Self::from_parts(
            read_var(LLM_API_KEY_VAR),
            read_var(SEARCH_API_KEY_VAR),
            read_var(SEARCH_ENGINE_ID_VAR),
        )
    }

    /// Build credentials from raw values, validating presence.
    ///
    /// An empty string counts as missing.
    pub fn from_parts(
        llm_api_key: Option<String>,
        search_api_key: Option<String>,
        search_engine_id: Option<String>,
    ) -> Result<Self> {
        let mut missing = Vec::new();

        let llm_api_key = require(llm_api_key, LLM_API_KEY_VAR, &mut missing);
        let search_api_key = require(search_api_key, SEARCH_API_KEY_VAR, &mut missing);
        let search_engine_id = require(search_engine_id, SEARCH_ENGINE_ID_VAR, &mut missing);

        if !missing.is_empty() {
            return Err(missing_vars_error(&missing));
        }

        Ok(Self {
            llm: LlmCredentials {
                api_key: llm_api_key.unwrap_or_default(),
            },
            search: SearchCredentials {
                api_key: search_api_key.unwrap_or_default(),
                engine_id: search_engine_id.unwrap_or_default(),
            },
        })
    }
}

impl SearchCredentials {
    /// Load only the search credential pair from the environment.
    ///
    /// Used by the raw search diagnostic, which does not need the LLM key.
    pub fn from_env() -> Result<Self> {
        Self::from_parts(read_var(SEARCH_API_KEY_VAR), read_var(SEARCH_ENGINE_ID_VAR))
    }

    /// Build search credentials from raw values, validating presence.
    pub fn from_parts(api_key: Option<String>, engine_id: Option<String>) -> Result<Self> {
        let mut missing = Vec::new();

        let api_key = require(api_key, SEARCH_API_KEY_VAR, &mut missing);
        let engine_id = require(engine_id, SEARCH_ENGINE_ID_VAR, &mut missing);

        if !missing.is_empty() {
            return Err(missing_vars_error(&missing));
        }

        Ok(Self {
            api_key: api_key.unwrap_or_default(),
            engine_id: engine_id.unwrap_or_default(),
        })
    }
}

/// Read an environment variable, treating unset and empty the same.
fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Track a required value, recording its variable name when absent or empty.
fn require(
    value: Option<String>,
    var_name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(var_name);
            None
        }
    }
}

fn missing_vars_error(missing: &[&str]) -> VevError {
    VevError::Config(format!(
        "Missing required environment variable(s): {}. \
         Set them with: export {}='...'",
        missing.join(", "),
        missing.join("='...' && export ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_all_present() {
        let creds = Credentials::from_parts(
            Some("sk-test".to_string()),
            Some("search-key".to_string()),
            Some("engine-id".to_string()),
        )
        .unwrap();

        assert_eq!(creds.llm.api_key, "sk-test");
        assert_eq!(creds.search.api_key, "search-key");
        assert_eq!(creds.search.engine_id, "engine-id");
    }

    #[test]
    fn test_from_parts_missing_one_names_it() {
        let err = Credentials::from_parts(
            Some("sk-test".to_string()),
            None,
            Some("engine-id".to_string()),
        )
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains(SEARCH_API_KEY_VAR));
        assert!(!msg.contains("OPENAI_API_KEY,"));
    }

    #[test]
    fn test_from_parts_missing_all_names_all() {
        let err = Credentials::from_parts(None, None, None).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains(LLM_API_KEY_VAR));
        assert!(msg.contains(SEARCH_API_KEY_VAR));
        assert!(msg.contains(SEARCH_ENGINE_ID_VAR));
    }

    #[test]
    fn test_from_parts_empty_counts_as_missing() {
        let err = Credentials::from_parts(
            Some(String::new()),
            Some("search-key".to_string()),
            Some("engine-id".to_string()),
        )
        .unwrap_err();

        assert!(err.to_string().contains(LLM_API_KEY_VAR));
    }

    #[test]
    fn test_search_credentials_from_parts() {
        let creds = SearchCredentials::from_parts(
            Some("search-key".to_string()),
            Some("engine-id".to_string()),
        )
        .unwrap();

        assert_eq!(creds.api_key, "search-key");
        assert_eq!(creds.engine_id, "engine-id");

        let err = SearchCredentials::from_parts(None, Some("engine-id".to_string())).unwrap_err();
        assert!(err.to_string().contains(SEARCH_API_KEY_VAR));
    }
}
