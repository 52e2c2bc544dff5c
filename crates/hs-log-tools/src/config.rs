//! Source-selection settings, loadable as the `[tail]` table of the agent config.

use serde::Deserialize;

use crate::request::DEFAULT_LINES;

/// Settings for resolving and reading log sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TailConfig {
    /// Line count used when a request omits `lines` or gives a value below 1.
    #[serde(default = "default_lines")]
    pub default_lines: usize,
    /// Conventional syslog path; always served by the journal when it isn't a
    /// regular file.
    #[serde(default = "default_syslog_path")]
    pub syslog_path: String,
    /// Missing paths containing this directory fall back to the journal.
    #[serde(default = "default_system_log_dir")]
    pub system_log_dir: String,
    /// Program invoked for journal fallback.
    #[serde(default = "default_journal_command")]
    pub journal_command: String,
}

fn default_lines() -> usize {
    DEFAULT_LINES
}

fn default_syslog_path() -> String {
    "/var/log/syslog".into()
}

fn default_system_log_dir() -> String {
    "/var/log".into()
}

fn default_journal_command() -> String {
    "journalctl".into()
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            default_lines: default_lines(),
            syslog_path: default_syslog_path(),
            system_log_dir: default_system_log_dir(),
            journal_command: default_journal_command(),
        }
    }
}
