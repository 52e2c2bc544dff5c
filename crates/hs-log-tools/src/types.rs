//! Tool result types and the LogTool trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LogError;
use crate::source::{SourceKind, SourceResolver};

// ── Tail Report ───────────────────────────────────────────────

/// The lines returned for a tail request, plus what produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailReport {
    /// Requested path, echoed back.
    pub file: String,
    /// Backend that served the lines.
    pub source: SourceKind,
    /// Matching lines, oldest to newest.
    pub lines: Vec<String>,
    /// Always `lines.len()`.
    pub line_count: usize,
    /// Substring filter as supplied, or empty.
    pub filter: String,
    /// Regex as supplied, or empty.
    pub regex: String,
    /// The predicate that was actually evaluated.
    pub applied_filter: String,
}

// ── Tool Result ───────────────────────────────────────────────

/// Result of executing a log tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that produced this result.
    pub tool_name: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Structured result data (JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Error message if success is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable error kind if success is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl ToolResult {
    pub fn success(
        tool_name: impl Into<String>,
        data: serde_json::Value,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            data: Some(data),
            summary: Some(summary.into()),
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            data: None,
            summary: None,
            error: Some(error.into()),
            error_kind: None,
        }
    }

    /// Failure carrying the error's message and kind.
    pub fn from_error(tool_name: impl Into<String>, err: &LogError) -> Self {
        Self {
            error_kind: Some(err.kind().to_string()),
            ..Self::failure(tool_name, err.to_string())
        }
    }
}

// ── LogTool Trait ─────────────────────────────────────────────

/// Trait for log tools.
///
/// `execute` is the error boundary: failures come back as a failed
/// [`ToolResult`], never as an `Err` or a panic.
#[async_trait]
pub trait LogTool: Send + Sync {
    /// Tool name (e.g., "get_log_info").
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema describing accepted arguments.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with JSON arguments, resolving paths through `resolver`.
    async fn execute(&self, args: serde_json::Value, resolver: &dyn SourceResolver) -> ToolResult;
}
