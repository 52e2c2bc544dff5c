//! get_log_info — recent lines from a log file with optional substring or regex filtering.

use async_trait::async_trait;
use serde_json::json;

use crate::error::LogResult;
use crate::request::{DEFAULT_LINES, LogRequest};
use crate::source::SourceResolver;
use crate::tail;
use crate::types::{LogTool, ToolResult};

pub struct GetLogInfo {
    default_lines: usize,
}

impl GetLogInfo {
    /// `default_lines` below 1 is raised to 1.
    pub fn new(default_lines: usize) -> Self {
        Self {
            default_lines: default_lines.max(1),
        }
    }

    async fn run(
        &self,
        args: &serde_json::Value,
        resolver: &dyn SourceResolver,
    ) -> LogResult<ToolResult> {
        let request = LogRequest::from_args(args, self.default_lines)?;
        let report = tail::tail(&request, resolver).await?;

        let summary = format!(
            "Showing {} lines from {} ({:?})",
            report.line_count, report.file, report.source
        );
        let data = serde_json::to_value(&report)?;
        Ok(ToolResult::success(self.name(), data, summary))
    }
}

impl Default for GetLogInfo {
    fn default() -> Self {
        Self::new(DEFAULT_LINES)
    }
}

#[async_trait]
impl LogTool for GetLogInfo {
    fn name(&self) -> &str {
        "get_log_info"
    }

    fn description(&self) -> &str {
        "Read recent lines from a log file with optional substring or regex filtering."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "file": {
                    "type": "string",
                    "description": "Path to log file to read (e.g. /var/log/syslog)"
                },
                "lines": {
                    "type": "number",
                    "description": format!("Number of lines from the end (default {})", self.default_lines),
                    "default": self.default_lines
                },
                "filter": {
                    "type": "string",
                    "description": "Case-sensitive substring to include only matching lines."
                },
                "regex": {
                    "type": "string",
                    "description": "Regular expression to include only lines matching the pattern."
                }
            },
            "required": ["file"]
        })
    }

    async fn execute(&self, args: serde_json::Value, resolver: &dyn SourceResolver) -> ToolResult {
        match self.run(&args, resolver).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = self.name(), kind = e.kind(), error = %e, "log tool failed");
                ToolResult::from_error(self.name(), &e)
            }
        }
    }
}
