//! Command executor — dispatches tool calls to the registry.

use std::time::Instant;

use hs_log_tools::{SourceResolver, ToolResult};

use crate::protocol::{AgentResponse, LIST_TOOLS, ToolCall};
use crate::registry::ToolRegistry;

/// Executes tool calls against a registry and a source resolver.
///
/// Generic over the resolver for testability.
pub struct CommandExecutor<'a> {
    registry: &'a ToolRegistry,
    resolver: &'a dyn SourceResolver,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(registry: &'a ToolRegistry, resolver: &'a dyn SourceResolver) -> Self {
        Self { registry, resolver }
    }

    /// Execute one call and produce its response. Never fails.
    pub async fn execute(&self, call: ToolCall) -> AgentResponse {
        if call.tool == LIST_TOOLS {
            return AgentResponse::Listing {
                tools: self.registry.list_tools(),
            };
        }

        let start = Instant::now();
        let Some(idx) = self.registry.lookup(&call.tool) else {
            tracing::warn!(tool = %call.tool, "unknown tool requested");
            let mut result = ToolResult::failure(&call.tool, format!("unknown tool: {}", call.tool));
            result.error_kind = Some("unknown_tool".into());
            return AgentResponse::Tool(result);
        };

        let result = self
            .registry
            .execute(idx, call.arguments, self.resolver)
            .await;
        let latency_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            tool = %call.tool,
            success = result.success,
            latency_ms,
            "tool call finished"
        );
        AgentResponse::Tool(result)
    }
}
