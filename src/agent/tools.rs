//! Tool definitions and execution for the agent.
//!
//! Supported tools form a closed sum type. A tool-call request from the model
//! is parsed into a `ToolCall` before anything runs; unknown names and missing
//! arguments are rejected locally and never turn into network calls.

use crate::error::{Result, VevError};
use crate::search::{format_results, SearchProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Search the web for current information.
    WebSearch { query: String },
}

/// Tool execution context with access to the search provider.
pub struct ToolContext {
    provider: Arc<dyn SearchProvider>,
    num_results: u32,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(provider: Arc<dyn SearchProvider>, num_results: u32) -> Self {
        Self {
            provider,
            num_results,
        }
    }

    /// Execute a tool call and return the result as a string.
    pub async fn execute(&self, tool: &ToolCall) -> String {
        match tool {
            ToolCall::WebSearch { query } => self.execute_web_search(query).await,
        }
    }

    /// Run a web search, converting any failure into ordinary tool output.
    ///
    /// The tool never propagates an error past its own boundary; transport and
    /// API failures become text the model can react to.
    async fn execute_web_search(&self, query: &str) -> String {
        match self.provider.search(query, self.num_results).await {
            Ok(results) => format_results(&results),
            Err(e) => format!("An error occurred during search: {}", e),
        }
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![ChatCompletionTool {
        r#type: ChatCompletionToolType::Function,
        function: FunctionObject {
            name: "web_search".to_string(),
            description: Some(
                "Search the web for current information. \
                Use this when the answer depends on recent events or facts \
                you are not certain about."
                    .to_string(),
            ),
            parameters: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query"
                    }
                },
                "required": ["query"]
            })),
            strict: None,
        },
    }]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| VevError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "web_search" => {
            let query = args["query"]
                .as_str()
                .ok_or_else(|| VevError::Agent("Missing 'query' argument".to_string()))?
                .to_string();
            Ok(ToolCall::WebSearch { query })
        }
        _ => Err(VevError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchResult, NO_RESULTS_SENTINEL};
    use async_trait::async_trait;

    /// Provider returning a canned response, for exercising the tool layer
    /// without the network.
    struct FakeProvider {
        response: std::result::Result<Vec<SearchResult>, String>,
    }

    #[async_trait]
    impl SearchProvider for FakeProvider {
        async fn search(&self, _query: &str, _limit: u32) -> Result<Vec<SearchResult>> {
            match &self.response {
                Ok(results) => Ok(results.clone()),
                Err(msg) => Err(VevError::Search(msg.clone())),
            }
        }
    }

    fn context_with(response: std::result::Result<Vec<SearchResult>, String>) -> ToolContext {
        ToolContext::new(Arc::new(FakeProvider { response }), 3)
    }

    #[test]
    fn test_parse_web_search_tool() {
        let tool = parse_tool_call("web_search", r#"{"query": "2024 Super Bowl winner"}"#).unwrap();
        match tool {
            ToolCall::WebSearch { query } => assert_eq!(query, "2024 Super Bowl winner"),
        }
    }

    #[test]
    fn test_parse_missing_query() {
        let err = parse_tool_call("web_search", r#"{}"#).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_tool_call("web_search", "not json").unwrap_err();
        assert!(err.to_string().contains("Invalid tool arguments"));
    }

    #[test]
    fn test_parse_unknown_tool() {
        let err = parse_tool_call("launch_missiles", r#"{"target": "moon"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown tool: launch_missiles"));
    }

    #[tokio::test]
    async fn test_execute_formats_results() {
        let context = context_with(Ok(vec![SearchResult {
            title: Some("Chiefs win".to_string()),
            link: Some("https://nfl.com".to_string()),
            snippet: Some("25-22 in overtime".to_string()),
        }]));

        let output = context
            .execute(&ToolCall::WebSearch {
                query: "2024 Super Bowl winner".to_string(),
            })
            .await;

        assert_eq!(output, "Title: Chiefs win\nSnippet: 25-22 in overtime");
    }

    #[tokio::test]
    async fn test_execute_zero_results_returns_sentinel() {
        let context = context_with(Ok(vec![]));

        let output = context
            .execute(&ToolCall::WebSearch {
                query: "xyzzy".to_string(),
            })
            .await;

        assert_eq!(output, NO_RESULTS_SENTINEL);
    }

    #[tokio::test]
    async fn test_execute_converts_errors_to_text() {
        let context = context_with(Err("connection refused".to_string()));

        let output = context
            .execute(&ToolCall::WebSearch {
                query: "anything".to_string(),
            })
            .await;

        assert_eq!(
            output,
            "An error occurred during search: Search error: connection refused"
        );
    }

    #[test]
    fn test_tool_definitions_declare_web_search() {
        let defs = tool_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].function.name, "web_search");
        let params = defs[0].function.parameters.as_ref().unwrap();
        assert_eq!(params["required"][0], "query");
    }
}
