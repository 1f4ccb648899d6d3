//! Google Custom Search JSON API client.

use super::{SearchProvider, SearchResult};
use crate::config::SearchCredentials;
use crate::error::{Result, VevError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Custom Search JSON API endpoint.
const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Web search backed by the Google Custom Search JSON API.
pub struct GoogleSearch {
    http: reqwest::Client,
    credentials: SearchCredentials,
}

/// Response envelope from the Custom Search API.
///
/// The `items` key is absent entirely when a query matches nothing.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl GoogleSearch {
    /// Create a new client with the given search credentials.
    pub fn new(credentials: SearchCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        debug!("Searching the web for: {}", query);

        let response = self
            .http
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", self.credentials.api_key.as_str()),
                ("cx", self.credentials.engine_id.as_str()),
                ("q", query),
                ("num", &limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            // Prefer the API's own error message when it sends one
            let detail = match response.json::<ApiErrorResponse>().await {
                Ok(body) => format!("{} (code {})", body.error.message, body.error.code),
                Err(_) => format!("HTTP status {}", status),
            };
            return Err(VevError::Search(detail));
        }

        let body: SearchResponse = response.json().await?;
        debug!("Search returned {} result(s)", body.items.len());

        Ok(body.items)
    }
}
