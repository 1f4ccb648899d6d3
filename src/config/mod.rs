//! Configuration module for Vev.
//!
//! Handles application settings and API credentials.

mod credentials;
mod settings;

pub use credentials::{
    credential_vars, Credentials, LlmCredentials, SearchCredentials, LLM_API_KEY_VAR,
    SEARCH_API_KEY_VAR, SEARCH_ENGINE_ID_VAR,
};
pub use settings::{GeneralSettings, LlmSettings, SearchSettings, Settings};
