//! Vev - Web-Grounded Chat Agent
//!
//! A CLI chat agent that grounds LLM conversations with live web search.
//!
//! The name "Vev" comes from the Norwegian word for "web."
//!
//! # Overview
//!
//! Vev allows you to:
//! - Chat interactively with an LLM that can search the web when it needs
//!   fresh information
//! - Ask one-shot questions, with or without the search tool
//! - Run raw web searches to verify your search API setup
//!
//! The heart of the crate is the manual tool-call orchestration loop: when the
//! model responds with a tool-call request instead of text, Vev executes the
//! named tool locally, feeds the result back into the conversation as a tool
//! turn, and lets the model produce a final answer grounded in the result.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Settings and credential management
//! - `search` - Web search provider abstraction and the Google Custom Search client
//! - `agent` - Tool definitions and the chat session orchestration loop
//! - `cli` - Command-line interface and terminal output
//!
//! # Example
//!
//! ```rust,no_run
//! use vev::agent::{ChatSession, ToolContext};
//! use vev::config::{Credentials, Settings};
//! use vev::search::GoogleSearch;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let credentials = Credentials::from_env()?;
//!
//!     let provider = Arc::new(GoogleSearch::new(credentials.search.clone()));
//!     let tools = ToolContext::new(provider, settings.search.num_results);
//!
//!     let mut session = ChatSession::new(&credentials, tools, &settings.llm.model);
//!     let response = session.send_message("Who won the 2024 Super Bowl?").await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod search;

pub use error::{Result, VevError};
