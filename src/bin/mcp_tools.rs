//! Lists the client tools the bridge would register.
//!
//! Usage:
//!
//! ```text
//! MCP_SERVERS_JSON='[{"name": "fs", "url": "http://localhost:8080/mcp"}]' mcp_tools
//! ```
//!
//! Each registered tool is written to stdout as one line of function-calling
//! JSON. Diagnostics go to stderr through `tracing`; set `RUST_LOG` to adjust
//! verbosity (default `info`).

use mcp_toolbridge::agent::ports::ClientTool;
use mcp_toolbridge::tool_registry::services::McpToolRegistryBuilder;
use std::io::{self, Write};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors that abort the listing.
#[derive(Debug, Error)]
enum ListError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to encode tool schema: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> Result<(), ListError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ListError::Runtime)?;
    let tools = runtime.block_on(McpToolRegistryBuilder::from_process_env().build());

    let mut stdout = io::stdout().lock();
    for tool in &tools {
        let line = serde_json::to_string(&tool.schema())?;
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}
