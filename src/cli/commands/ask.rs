//! Ask command implementation.

use crate::agent::{ChatSession, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::{Output, SpinnerGuard};
use crate::config::{Credentials, Settings};
use crate::search::GoogleSearch;
use anyhow::Result;
use std::sync::Arc;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    model: Option<String>,
    no_search: bool,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Chat) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vev doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let credentials = Credentials::from_env()?;
    let model = model.unwrap_or_else(|| settings.llm.model.clone());

    let provider = Arc::new(GoogleSearch::new(credentials.search.clone()));
    let tools = ToolContext::new(provider, settings.search.num_results);

    let mut session = ChatSession::new(&credentials, tools, &model)
        .with_max_tool_hops(settings.llm.max_tool_hops)
        .with_tools(!no_search);

    let spinner = SpinnerGuard::start("Thinking...");
    let result = session.send_message(question).await;
    drop(spinner);

    match result {
        Ok(response) => {
            println!("\n{}\n", response.content);

            if !response.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", response.tool_calls.len()));
                for call in &response.tool_calls {
                    Output::tool_call(&call.name, &call.arguments);
                }
                println!();
            }
        }
        Err(e) => {
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
