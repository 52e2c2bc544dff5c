//! Mock resolver for testing — serves pre-loaded log content.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::TailConfig;
use crate::error::{LogError, LogResult};
use crate::source::{LogSource, PathProbe, SourceKind, SourceResolver, select_source};

/// A mock resolver that serves pre-loaded content by path.
///
/// Source selection goes through the same [`select_source`] rules as the real
/// resolver: registered paths count as regular files, everything else as
/// missing. Journal fallbacks serve the configured journal lines, or fail with
/// a read error when none were set.
pub struct MockResolver {
    files: HashMap<String, Vec<String>>,
    journal: Option<Vec<String>>,
    config: TailConfig,
    resolves: AtomicUsize,
    reads: Arc<AtomicUsize>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            journal: None,
            config: TailConfig::default(),
            resolves: AtomicUsize::new(0),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add a file with the given lines.
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        self.files.insert(path.into(), lines);
    }

    /// Serve these lines for journal fallbacks.
    pub fn set_journal(&mut self, lines: Vec<String>) {
        self.journal = Some(lines);
    }

    /// Create a mock with a 100-line numbered file at `/srv/app/numbered.log`.
    pub fn with_numbered_file() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/srv/app/numbered.log",
            (1..=100).map(|i| format!("line {i}")).collect(),
        );
        m
    }

    /// Create a mock with a plaintext application log.
    pub fn with_app_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/srv/app/app.log",
            vec![
                "2024-01-15 12:00:01 INFO Starting application".into(),
                "2024-01-15 12:00:05 ERROR Failed to open socket: permission denied".into(),
                "2024-01-15 12:00:10 WARNING Low disk space on /data".into(),
                "2024-01-15 12:00:15 DEBUG Checking upstream connection".into(),
                "2024-01-15 12:00:20 ERROR Worker 3 exited with code 137".into(),
                "2024-01-15 12:00:25 CRITICAL GPU 0 temperature 92C exceeds threshold".into(),
                "2024-01-15 12:00:30 INFO Restarting worker 3".into(),
            ],
        );
        m
    }

    /// Create a mock with no files and a small journal.
    pub fn with_journal_sample() -> Self {
        let mut m = Self::new();
        m.set_journal(vec![
            "Jan 15 12:00:01 edge1 systemd[1]: Started Daily Cleanup.".into(),
            "Jan 15 12:00:05 edge1 kernel: eth0: link up".into(),
            "Jan 15 12:00:10 edge1 sshd[812]: Accepted publickey for admin".into(),
            "Jan 15 12:00:15 edge1 kernel: nvidia 0000:01:00.0: GPU has fallen off the bus".into(),
        ]);
        m
    }

    /// Number of `resolve` calls so far.
    pub fn resolves(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }

    /// Number of `tail_lines` calls on sources handed out so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceResolver for MockResolver {
    async fn resolve(&self, path: &str) -> LogResult<Box<dyn LogSource>> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        let probe = if self.files.contains_key(path) {
            PathProbe::RegularFile
        } else {
            PathProbe::Missing
        };
        let kind = select_source(path, probe, &self.config)?;
        let (name, lines) = match kind {
            SourceKind::File => (path.to_string(), self.files.get(path).cloned()),
            SourceKind::Journal => (self.config.journal_command.clone(), self.journal.clone()),
        };
        Ok(Box::new(MockSource {
            kind,
            name,
            lines,
            reads: Arc::clone(&self.reads),
        }))
    }
}

struct MockSource {
    kind: SourceKind,
    name: String,
    lines: Option<Vec<String>>,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl LogSource for MockSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn tail_lines(&self, limit: usize) -> LogResult<Vec<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let lines = self
            .lines
            .as_ref()
            .ok_or_else(|| LogError::read(&self.name, "journal unavailable"))?;
        let start = lines.len().saturating_sub(limit);
        Ok(lines[start..].to_vec())
    }
}
