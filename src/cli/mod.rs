//! CLI module for Vev.

pub mod commands;
mod output;
pub mod preflight;

pub use output::{Output, SpinnerGuard};

use clap::{Parser, Subcommand};

/// Vev - Web-Grounded Chat Agent
///
/// A CLI chat agent that grounds LLM conversations with live web search.
/// The name "Vev" comes from the Norwegian word for "web."
#[derive(Parser, Debug)]
#[command(name = "vev")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session with web search
    Chat {
        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Ask a single question and exit
    Ask {
        /// The question to ask
        question: String,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,

        /// Answer from model knowledge only, without the search tool
        #[arg(long)]
        no_search: bool,
    },

    /// Run a raw web search (diagnostic for the search API setup)
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (defaults to search.num_results)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Check environment and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "llm.model")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
