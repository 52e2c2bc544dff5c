//! hostscope agent — serves log tools over stdin/stdout.
//!
//! Reads line-delimited JSON tool calls from stdin and writes one result per
//! call to stdout. Diagnostics go to stderr as JSON.

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use hs_agent::config::AgentConfig;
use hs_agent::executor::CommandExecutor;
use hs_agent::registry::ToolRegistry;
use hs_agent::stdio_loop;
use hs_log_tools::SystemResolver;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hs-agent starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args().nth(1);
    let config = AgentConfig::load(config_path.as_deref())?;
    tracing::info!(
        syslog_path = %config.tail.syslog_path,
        journal_command = %config.tail.journal_command,
        default_lines = config.tail.default_lines,
        "config loaded"
    );

    // ── Build tool registry ─────────────────────────────────────
    let registry = ToolRegistry::with_defaults(&config.tail);
    tracing::info!(tool_count = registry.len(), "tool registry initialized");

    let resolver = SystemResolver::new(config.tail.clone());
    let executor = CommandExecutor::new(&registry, &resolver);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = stdio_loop::run(stdin, stdout, &executor, config.pretty_output) => {
            result?;
        }
        // Dropping an in-flight request kills any journalctl child it spawned
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    tracing::info!("hs-agent stopped");
    Ok(())
}
