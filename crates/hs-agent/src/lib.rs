//! hostscope agent — library crate for the stdio tool runtime.
//!
//! Re-exports all modules so external crates (e.g. `hs-e2e-tests`) can
//! access internal types like `CommandExecutor` and `ToolRegistry`.

pub mod config;
pub mod executor;
pub mod protocol;
pub mod registry;
pub mod stdio_loop;
