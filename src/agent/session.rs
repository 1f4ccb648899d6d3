//! Chat session with manual tool-call orchestration.

use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use crate::config::Credentials;
use crate::error::{Result, VevError};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestToolMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use tracing::{debug, info};

/// Default system prompt for the agent.
const DEFAULT_SYSTEM_PROMPT: &str = r#"You are a helpful assistant with access to live web search.

When a question depends on current events, recent facts, or anything you are
not certain about, use the 'web_search' tool before answering. For questions
you can answer confidently from your own knowledge, answer directly.

When you use search results, ground your answer in them and keep it concise."#;

/// Number of messages kept in the transcript before trimming.
const HISTORY_LIMIT: usize = 30;

/// Default bound on tool-call round trips per user message.
const DEFAULT_MAX_TOOL_HOPS: usize = 4;

/// Interactive chat session with tool-calling support.
///
/// Owns the ordered, append-only transcript exchanged with the model. Each
/// `send_message` call runs the orchestration loop: send the transcript, and
/// if the model requests a tool, execute it and feed the result back in as a
/// tool turn until the model answers with plain text.
pub struct ChatSession {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    tools: ToolContext,
    messages: Vec<ChatCompletionRequestMessage>,
    max_tool_hops: usize,
    tools_enabled: bool,
}

impl ChatSession {
    /// Create a new chat session from explicit credentials.
    pub fn new(credentials: &Credentials, tools: ToolContext, model: &str) -> Self {
        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(DEFAULT_SYSTEM_PROMPT)
            .build()
            .expect("Failed to build system message");

        Self {
            client: create_client(credentials),
            model: model.to_string(),
            tools,
            messages: vec![system_message.into()],
            max_tool_hops: DEFAULT_MAX_TOOL_HOPS,
            tools_enabled: true,
        }
    }

    /// Set the bound on tool-call round trips per user message.
    pub fn with_max_tool_hops(mut self, max: usize) -> Self {
        self.max_tool_hops = max;
        self
    }

    /// Enable or disable tool use for the whole session.
    ///
    /// With tools disabled, no tool definitions are sent and the model can
    /// only answer from its own knowledge.
    pub fn with_tools(mut self, enabled: bool) -> Self {
        self.tools_enabled = enabled;
        self
    }

    /// Clear conversation history (keeps system prompt).
    pub fn clear_history(&mut self) {
        self.messages.truncate(1);
    }

    /// Number of messages currently in the transcript, system prompt included.
    pub fn history_len(&self) -> usize {
        self.messages.len()
    }

    /// Send a message and get a response, handling tool calls.
    pub async fn send_message(&mut self, user_input: &str) -> Result<ChatResponse> {
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(user_input)
            .build()
            .map_err(|e| VevError::Agent(e.to_string()))?;
        self.messages.push(user_message.into());

        let mut hops = 0;
        let mut tool_calls_made = Vec::new();

        loop {
            hops += 1;
            if hops > self.max_tool_hops {
                return Err(VevError::Agent(format!(
                    "Exceeded maximum tool round trips ({})",
                    self.max_tool_hops
                )));
            }

            debug!("Chat hop {}, {} messages", hops, self.messages.len());

            let mut request_builder = CreateChatCompletionRequestArgs::default();
            request_builder.model(&self.model).messages(self.messages.clone());
            if self.tools_enabled {
                request_builder.tools(tool_definitions());
            }
            let request = request_builder
                .build()
                .map_err(|e| VevError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| VevError::OpenAI(format!("Chat API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| VevError::Agent("No response from model".to_string()))?;

            // Check if the model wants to call tools
            if let Some(ref tool_calls) = choice.message.tool_calls {
                if !tool_calls.is_empty() {
                    // Record the assistant's tool-call turn before the results
                    let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                        .tool_calls(tool_calls.clone())
                        .build()
                        .map_err(|e| VevError::Agent(e.to_string()))?;
                    self.messages.push(assistant_msg.into());

                    for tool_call in tool_calls {
                        let name = &tool_call.function.name;
                        let arguments = &tool_call.function.arguments;

                        info!("Model requested tool: {} with args: {}", name, arguments);

                        let result = resolve_tool_call(&self.tools, name, arguments).await;

                        let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                            .tool_call_id(&tool_call.id)
                            .content(result.clone())
                            .build()
                            .map_err(|e| VevError::Agent(e.to_string()))?;
                        self.messages.push(tool_msg.into());

                        tool_calls_made.push(ToolCallRecord {
                            name: name.clone(),
                            arguments: arguments.clone(),
                            result,
                        });
                    }

                    continue;
                }
            }

            // No tool calls: this must be the final text answer
            let content = match &choice.message.content {
                Some(text) => text.clone(),
                None => {
                    return Err(VevError::Agent(
                        "Model response contained neither text nor a tool call".to_string(),
                    ))
                }
            };

            self.add_assistant_message(&content)?;
            self.trim_history(HISTORY_LIMIT);

            return Ok(ChatResponse {
                content,
                tool_calls: tool_calls_made,
                hops,
            });
        }
    }

    /// Add an assistant text message to history.
    fn add_assistant_message(&mut self, content: &str) -> Result<()> {
        let msg = ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| VevError::Agent(e.to_string()))?;
        self.messages.push(msg.into());
        Ok(())
    }

    /// Trim conversation history to keep it manageable.
    fn trim_history(&mut self, max_messages: usize) {
        if self.messages.len() > max_messages {
            // Keep system message (index 0) and last N-1 messages
            let start = self.messages.len() - (max_messages - 1);
            let mut trimmed = vec![self.messages[0].clone()];
            trimmed.extend(self.messages[start..].iter().cloned());
            self.messages = trimmed;
        }
    }
}

/// Resolve one tool-call request into the result string fed back to the model.
///
/// Unknown tool names and malformed arguments become synthetic failure
/// results; they are never invoked or forwarded as real calls.
async fn resolve_tool_call(tools: &ToolContext, name: &str, arguments: &str) -> String {
    match parse_tool_call(name, arguments) {
        Ok(tool) => tools.execute(&tool).await,
        Err(e) => format!("Tool call rejected: {}", e),
    }
}

/// Final outcome of one user message.
#[derive(Debug)]
pub struct ChatResponse {
    /// The model's final text answer.
    pub content: String,
    /// Record of all tool calls made while producing it.
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of model round trips used.
    pub hops: usize,
}

/// Record of a tool call made during a turn.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    /// Name of the tool the model requested.
    pub name: String,
    /// JSON arguments the model supplied.
    pub arguments: String,
    /// Result string fed back to the model.
    pub result: String,
}

impl std::fmt::Display for ToolCallRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LlmCredentials, SearchCredentials};
    use crate::search::{SearchProvider, SearchResult};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoopProvider;

    #[async_trait]
    impl SearchProvider for NoopProvider {
        async fn search(&self, _query: &str, _limit: u32) -> Result<Vec<SearchResult>> {
            Ok(vec![])
        }
    }

    fn test_session() -> ChatSession {
        let credentials = Credentials {
            llm: LlmCredentials {
                api_key: "sk-test".to_string(),
            },
            search: SearchCredentials {
                api_key: "search-key".to_string(),
                engine_id: "engine-id".to_string(),
            },
        };
        let tools = ToolContext::new(Arc::new(NoopProvider), 3);
        ChatSession::new(&credentials, tools, "gpt-4o-mini")
    }

    #[test]
    fn test_new_session_holds_only_system_prompt() {
        let session = test_session();
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_clear_history_keeps_system_prompt() {
        let mut session = test_session();
        session.add_assistant_message("hello").unwrap();
        assert_eq!(session.history_len(), 2);

        session.clear_history();
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_trim_history_preserves_system_prompt() {
        let mut session = test_session();
        for i in 0..40 {
            session.add_assistant_message(&format!("message {}", i)).unwrap();
        }

        session.trim_history(10);
        assert_eq!(session.history_len(), 10);

        // The first message must still be the system prompt
        assert!(matches!(
            session.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_unknown_tool_becomes_failure_text() {
        let tools = ToolContext::new(Arc::new(NoopProvider), 3);
        let result = resolve_tool_call(&tools, "crystal_ball", r#"{"query": "x"}"#).await;
        assert!(result.starts_with("Tool call rejected:"));
        assert!(result.contains("Unknown tool: crystal_ball"));
    }

    #[tokio::test]
    async fn test_resolve_bad_arguments_become_failure_text() {
        let tools = ToolContext::new(Arc::new(NoopProvider), 3);
        let result = resolve_tool_call(&tools, "web_search", "{}").await;
        assert!(result.starts_with("Tool call rejected:"));
        assert!(result.contains("query"));
    }

    #[tokio::test]
    async fn test_resolve_valid_call_executes_tool() {
        let tools = ToolContext::new(Arc::new(NoopProvider), 3);
        let result = resolve_tool_call(&tools, "web_search", r#"{"query": "anything"}"#).await;
        assert_eq!(result, crate::search::NO_RESULTS_SENTINEL);
    }

    #[test]
    fn test_tool_call_record_display() {
        let record = ToolCallRecord {
            name: "web_search".to_string(),
            arguments: r#"{"query": "test"}"#.to_string(),
            result: "Found results".to_string(),
        };
        assert_eq!(format!("{}", record), r#"web_search({"query": "test"})"#);
    }
}
