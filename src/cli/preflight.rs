//! Pre-flight checks before network operations.
//!
//! Validates that required credentials are present in the environment before
//! any network call is attempted, so a misconfigured environment fails fast
//! with one clear message instead of mid-conversation.

use crate::config::{Credentials, SearchCredentials};
use crate::error::Result;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Chat and ask need the LLM key and the search credential pair.
    Chat,
    /// The raw search diagnostic needs only the search credential pair.
    Search,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error naming every missing
/// environment variable.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Chat => {
            Credentials::from_env()?;
        }
        Operation::Search => {
            SearchCredentials::from_env()?;
        }
    }
    Ok(())
}
