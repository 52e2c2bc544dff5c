//! Shared test harness for E2E integration tests.
//!
//! Wires the agent's executor to a real `SystemResolver` whose system log
//! paths point into a temporary directory, so fallbacks never touch the
//! host's `/var/log` or journal.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use hs_agent::executor::CommandExecutor;
use hs_agent::protocol::{AgentResponse, ToolCall};
use hs_agent::registry::ToolRegistry;
use hs_agent::stdio_loop;
use hs_log_tools::{SystemResolver, TailConfig, ToolResult};

pub struct TestHarness {
    /// Scratch directory standing in for the system log directory.
    pub dir: TempDir,
    pub config: TailConfig,
    pub registry: ToolRegistry,
    pub resolver: SystemResolver,
}

impl TestHarness {
    /// Harness whose journal command does not exist.
    pub fn new() -> Self {
        Self::with_journal_command("/nonexistent/bin/journalctl")
    }

    pub fn with_journal_command(command: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("log");
        std::fs::create_dir(&log_dir).unwrap();
        let config = TailConfig {
            syslog_path: log_dir.join("syslog").to_str().unwrap().to_string(),
            system_log_dir: log_dir.to_str().unwrap().to_string(),
            journal_command: command.to_string(),
            ..TailConfig::default()
        };
        Self {
            registry: ToolRegistry::with_defaults(&config),
            resolver: SystemResolver::new(config.clone()),
            config,
            dir,
        }
    }

    /// Harness whose journal is a shell script that echoes the arguments it
    /// received, then prints `lines`.
    #[cfg(unix)]
    pub fn with_fake_journal(lines: &[&str]) -> Self {
        let mut body = String::from("echo \"args: $*\"\n");
        for line in lines {
            body.push_str(&format!("echo '{line}'\n"));
        }
        Self::with_journal_script(&body)
    }

    /// Harness whose journal is a shell script running `body`.
    #[cfg(unix)]
    pub fn with_journal_script(body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let mut harness = Self::new();
        let script = harness.dir.path().join("journalctl");
        std::fs::write(&script, format!("#!/bin/sh\n{body}")).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        harness.config.journal_command = script.to_str().unwrap().to_string();
        harness.resolver = SystemResolver::new(harness.config.clone());
        harness
    }

    /// Path of `name` inside the stand-in system log directory.
    pub fn system_log_path(&self, name: &str) -> PathBuf {
        Path::new(&self.config.system_log_dir).join(name)
    }

    /// Write a log file outside the system log directory.
    pub fn write_log(&self, name: &str, lines: &[String]) -> String {
        let path = self.dir.path().join(name);
        let mut body = lines.join("\n");
        body.push('\n');
        std::fs::write(&path, body).unwrap();
        path.to_str().unwrap().to_string()
    }

    /// Write a log file with lines `line 1` … `line n`.
    pub fn write_numbered_log(&self, name: &str, n: usize) -> String {
        let lines: Vec<String> = (1..=n).map(|i| format!("line {i}")).collect();
        self.write_log(name, &lines)
    }

    /// Run `get_log_info` through the executor.
    pub async fn get_log_info(&self, arguments: serde_json::Value) -> ToolResult {
        let executor = CommandExecutor::new(&self.registry, &self.resolver);
        let call = ToolCall {
            tool: "get_log_info".into(),
            arguments,
        };
        match executor.execute(call).await {
            AgentResponse::Tool(result) => result,
            other => panic!("expected tool result, got {other:?}"),
        }
    }

    /// Feed raw protocol input through the stdio loop and return its output.
    pub async fn serve(&self, input: &str) -> String {
        let executor = CommandExecutor::new(&self.registry, &self.resolver);
        let mut out = Vec::new();
        stdio_loop::run(input.as_bytes(), &mut out, &executor, false)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }
}

/// Result lines as strings.
pub fn lines_of(result: &ToolResult) -> Vec<String> {
    result.data.as_ref().expect("successful result")["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap().to_string())
        .collect()
}
