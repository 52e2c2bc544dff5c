//! Tool registry for the agent.
//!
//! The agent uses this to look up tools by name when dispatching incoming
//! tool calls.

use std::collections::HashMap;

use serde::Serialize;

use hs_log_tools::{LogTool, SourceResolver, TailConfig, ToolResult};

/// Metadata about a registered tool (used by `list_tools`).
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub schema: serde_json::Value,
}

/// Tool registry, indexed by name for O(1) dispatch.
pub struct ToolRegistry {
    tools: Vec<Box<dyn LogTool>>,
    /// Map from tool name → index into `tools`.
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Box<dyn LogTool>>) -> Self {
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, tool)| (tool.name().to_string(), i))
            .collect();
        Self { tools, index }
    }

    /// Build with the default tool set.
    pub fn with_defaults(config: &TailConfig) -> Self {
        Self::new(hs_log_tools::tools::all_tools(config))
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Execute a tool by index.
    pub async fn execute(
        &self,
        index: usize,
        args: serde_json::Value,
        resolver: &dyn SourceResolver,
    ) -> ToolResult {
        self.tools[index].execute(args, resolver).await
    }

    /// List all registered tools with metadata.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                schema: tool.parameters_schema(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
