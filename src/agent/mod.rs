//! Agent system: tool definitions and the chat orchestration loop.
//!
//! The model never executes anything itself. It asks for a tool by name, the
//! session validates the request against the closed set of supported tools,
//! runs it locally, and feeds the textual result back into the conversation.

mod session;
mod tools;

pub use session::{ChatResponse, ChatSession, ToolCallRecord};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};
