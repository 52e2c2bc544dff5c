//! Log sources and the resolver that picks one for a requested path.
//!
//! A path is served either by reading the file directly or, for system log
//! paths that aren't regular files, by asking the systemd journal. Both
//! implement [`LogSource`], so the filter stage never cares which one ran.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

use crate::config::TailConfig;
use crate::error::{LogError, LogResult};
use crate::window::TailWindow;

/// Which backend served a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Journal,
}

/// A one-shot producer of the most recent lines of a log.
///
/// Implementations read the current tail once and return; they never follow.
#[async_trait]
pub trait LogSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Human-readable identifier used in error messages.
    fn name(&self) -> &str;

    /// Return up to `limit` of the most recent lines, oldest first.
    async fn tail_lines(&self, limit: usize) -> LogResult<Vec<String>>;
}

/// Picks the [`LogSource`] that serves a path.
///
/// Tools take a `&dyn SourceResolver`, so tests can swap in
/// [`crate::mock::MockResolver`] for the filesystem-backed [`SystemResolver`].
#[async_trait]
pub trait SourceResolver: Send + Sync {
    async fn resolve(&self, path: &str) -> LogResult<Box<dyn LogSource>>;
}

// ── Source selection ──────────────────────────────────────────

/// Outcome of inspecting a path before choosing a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProbe {
    /// Exists and is a regular file.
    RegularFile,
    /// Exists but is a directory or other non-regular file.
    NotRegular,
    /// Does not exist.
    Missing,
    /// Could not be inspected (e.g. permission denied on a parent).
    Unavailable,
}

impl PathProbe {
    pub fn from_metadata(result: std::io::Result<std::fs::Metadata>) -> Self {
        match result {
            Ok(meta) if meta.is_dir() => Self::NotRegular,
            Ok(meta) if meta.is_file() => Self::RegularFile,
            Ok(_) => Self::NotRegular,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::Missing,
            Err(_) => Self::Unavailable,
        }
    }
}

/// Decide which backend serves `path`.
///
/// Regular files are read directly. The conventional syslog path falls back to
/// the journal whatever the probe said; other paths fall back only when they
/// are missing and sit under the system log directory.
pub fn select_source(path: &str, probe: PathProbe, config: &TailConfig) -> LogResult<SourceKind> {
    match probe {
        PathProbe::RegularFile => Ok(SourceKind::File),
        _ if path == config.syslog_path => Ok(SourceKind::Journal),
        PathProbe::Missing if path.contains(config.system_log_dir.as_str()) => {
            Ok(SourceKind::Journal)
        }
        _ => Err(LogError::SourceNotFound(path.to_string())),
    }
}

/// Resolves paths against the local filesystem and journal.
#[derive(Debug, Clone, Default)]
pub struct SystemResolver {
    config: TailConfig,
}

impl SystemResolver {
    pub fn new(config: TailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SourceResolver for SystemResolver {
    async fn resolve(&self, path: &str) -> LogResult<Box<dyn LogSource>> {
        let probe = PathProbe::from_metadata(tokio::fs::metadata(path).await);
        let kind = select_source(path, probe, &self.config)?;
        tracing::debug!(path, ?probe, ?kind, "log source selected");

        Ok(match kind {
            SourceKind::File => Box::new(FileLogSource::new(path)),
            SourceKind::Journal => {
                tracing::info!(
                    path,
                    command = %self.config.journal_command,
                    "falling back to systemd journal"
                );
                Box::new(JournalLogSource::new(&self.config.journal_command))
            }
        })
    }
}

// ── File source ───────────────────────────────────────────────

/// Reads the tail of a regular file in a single forward pass.
///
/// Lines stream through a [`TailWindow`], so memory stays bounded by `limit`
/// no matter how large the file is.
pub struct FileLogSource {
    path: PathBuf,
    name: String,
}

impl FileLogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl LogSource for FileLogSource {
    fn kind(&self) -> SourceKind {
        SourceKind::File
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn tail_lines(&self, limit: usize) -> LogResult<Vec<String>> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| LogError::read(&self.name, e))?;
        let mut reader = BufReader::new(file);
        let mut window = TailWindow::new(limit);
        let mut buf = Vec::new();
        let mut scanned = 0usize;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| LogError::read(&self.name, e))?;
            if n == 0 {
                break;
            }
            window.push(decode_line(&buf));
            scanned += 1;
        }

        tracing::debug!(path = %self.name, scanned, kept = window.len(), "file tail read");
        Ok(window.into_vec())
    }
}

/// Strip the line terminator (`\n` or `\r\n`) and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

// ── Journal source ────────────────────────────────────────────

/// Reads the most recent entries from the systemd journal via `journalctl`.
pub struct JournalLogSource {
    program: String,
}

impl JournalLogSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, limit: usize) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-n")
            .arg(limit.to_string())
            .arg("--no-pager")
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl LogSource for JournalLogSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Journal
    }

    fn name(&self) -> &str {
        &self.program
    }

    async fn tail_lines(&self, limit: usize) -> LogResult<Vec<String>> {
        let output = self
            .command(limit)
            .output()
            .await
            .map_err(|e| LogError::read(&self.program, format!("failed to run: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LogError::read(
                &self.program,
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        let text = decode_journal_output(&self.program, output.stdout)?;
        Ok(parse_journal_output(&text, limit))
    }
}

/// Journal output must be UTF-8; anything else is unreadable output.
fn decode_journal_output(program: &str, stdout: Vec<u8>) -> LogResult<String> {
    String::from_utf8(stdout)
        .map_err(|e| LogError::read(program, format!("unreadable output: {e}")))
}

/// Split journal output into lines, keeping at most the last `limit`.
pub fn parse_journal_output(text: &str, limit: usize) -> Vec<String> {
    let mut window = TailWindow::new(limit);
    window.extend(text.lines().map(String::from));
    window.into_vec()
}
