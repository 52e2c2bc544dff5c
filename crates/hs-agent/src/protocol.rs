//! Wire types for the agent's line-delimited JSON protocol.

use serde::{Deserialize, Serialize};

use hs_log_tools::ToolResult;

use crate::registry::ToolInfo;

/// Reserved tool name that lists the registry instead of running a tool.
pub const LIST_TOOLS: &str = "list_tools";

/// One request line: a tool name plus its loosely typed arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub tool: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AgentResponse {
    Tool(ToolResult),
    Listing { tools: Vec<ToolInfo> },
}

impl AgentResponse {
    /// Failed result for a line that couldn't be decoded into a [`ToolCall`].
    pub fn invalid_request(message: impl std::fmt::Display) -> Self {
        let mut result = ToolResult::failure("agent", format!("invalid request: {message}"));
        result.error_kind = Some("invalid_request".into());
        Self::Tool(result)
    }
}
