//! Web search abstraction.
//!
//! Defines the `SearchProvider` trait the agent's tool layer executes against,
//! plus the result type and the plain-text formatting the model receives.

mod google;

pub use google::GoogleSearch;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Fixed sentinel returned when a search yields no results.
pub const NO_RESULTS_SENTINEL: &str = "No relevant search results found.";

/// A single web search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl SearchResult {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("N/A")
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or("N/A")
    }

    pub fn snippet(&self) -> &str {
        self.snippet.as_deref().unwrap_or("N/A")
    }
}

/// A web search backend.
///
/// One outbound network call per invocation; no caching and no retries.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a search and return up to `limit` results.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>>;
}

/// Format results as the plain text handed back to the model.
///
/// Each result becomes a Title/Snippet block; blocks are joined with a blank
/// line. Zero results produce the fixed sentinel string.
pub fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_SENTINEL.to_string();
    }

    results
        .iter()
        .map(|r| format!("Title: {}\nSnippet: {}", r.title(), r.snippet()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
