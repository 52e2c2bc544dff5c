//! Bounded, filterable log tail for hostscope.
//!
//! Resolves a path to either a regular file or the systemd journal, reads the
//! most recent lines through a fixed-capacity window, and narrows them with an
//! optional substring or regex filter. Exposed to the agent as the
//! `get_log_info` tool.

pub mod config;
pub mod error;
pub mod filter;
pub mod mock;
pub mod request;
pub mod source;
pub mod tail;
pub mod tools;
pub mod types;
pub mod window;

// Re-export key types for convenience
pub use config::TailConfig;
pub use error::{LogError, LogResult};
pub use filter::LineFilter;
pub use mock::MockResolver;
pub use request::LogRequest;
pub use source::{
    FileLogSource, JournalLogSource, LogSource, SourceKind, SourceResolver, SystemResolver,
};
pub use types::{LogTool, TailReport, ToolResult};
pub use window::TailWindow;
