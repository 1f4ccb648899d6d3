//! Interactive chat command with tool calling support.

use crate::agent::{ChatSession, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::{Output, SpinnerGuard};
use crate::config::{Credentials, Settings};
use crate::error::Result;
use crate::search::GoogleSearch;
use console::style;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Run the interactive chat command.
pub async fn run_chat(model: Option<String>, settings: Settings) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Chat) {
        Output::error(&format!("{}", e));
        Output::info("Run 'vev doctor' for detailed diagnostics.");
        return Err(e);
    }

    let credentials = Credentials::from_env()?;
    let model = model.unwrap_or_else(|| settings.llm.model.clone());

    let provider = Arc::new(GoogleSearch::new(credentials.search.clone()));
    let tools = ToolContext::new(provider, settings.search.num_results);

    let mut session = ChatSession::new(&credentials, tools, &model)
        .with_max_tool_hops(settings.llm.max_tool_hops);

    println!("\n{}", style("Vev Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask me anything. Type 'exit' to quit, 'clear' to reset the conversation.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("Your question:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        let bytes_read = stdin.lock().read_line(&mut input)?;

        // End-of-input terminates like an explicit exit
        if bytes_read == 0 {
            println!();
            Output::info("Goodbye!");
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if is_exit_command(input) {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("clear") {
            session.clear_history();
            Output::info("Conversation history cleared.");
            continue;
        }

        let spinner = SpinnerGuard::start("Thinking...");
        let result = session.send_message(input).await;
        drop(spinner);

        // A bad turn is reported inline; the prompt comes back
        match result {
            Ok(response) => {
                for call in &response.tool_calls {
                    Output::tool_call(&call.name, &call.arguments);
                }

                println!("\n{}", style("Agent's Answer:").cyan().bold());
                for line in response.content.lines() {
                    println!("  {}", line);
                }
                println!();
            }
            Err(e) => {
                Output::error(&format!("An unexpected error occurred: {}", e));
                Output::info("Please try again.");
            }
        }
    }

    Ok(())
}

/// Check whether an input line requests session termination.
fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}
