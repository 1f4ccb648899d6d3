//! Search command implementation.
//!
//! Runs one raw query against the search API and prints the results. Useful
//! for verifying the search credentials independently of the LLM.

use crate::cli::preflight::{self, Operation};
use crate::cli::{Output, SpinnerGuard};
use crate::config::{SearchCredentials, Settings};
use crate::search::{GoogleSearch, SearchProvider};
use anyhow::Result;

/// Run the search command.
pub async fn run_search(query: &str, limit: Option<u32>, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Search) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vev doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let credentials = SearchCredentials::from_env()?;
    let provider = GoogleSearch::new(credentials);
    let limit = limit.unwrap_or(settings.search.num_results);

    Output::info(&format!("Searching the web for: '{}'", query));

    let spinner = SpinnerGuard::start("Searching...");
    let results = provider.search(query, limit).await;
    drop(spinner);

    match results {
        Ok(items) => {
            if items.is_empty() {
                Output::warning("No results found for your query.");
            } else {
                Output::success(&format!("Search complete. Found {} result(s)", items.len()));

                for (i, item) in items.iter().enumerate() {
                    Output::search_result(i + 1, item.title(), item.link(), item.snippet());
                }
                println!();
            }
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
