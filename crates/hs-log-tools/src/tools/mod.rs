//! Log tool implementations.

pub mod get_log_info;

pub use get_log_info::GetLogInfo;

use crate::config::TailConfig;
use crate::types::LogTool;

/// All log tools, configured from `config`.
pub fn all_tools(config: &TailConfig) -> Vec<Box<dyn LogTool>> {
    vec![Box::new(GetLogInfo::new(config.default_lines))]
}
