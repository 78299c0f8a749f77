//! HTTP server command
//!
//! Runs the asterias HTTP server with the page and API routes.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use asterias_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// SQLite database file, created on first start
    #[arg(long, env = "ASTERIAS_DB", default_value = "starfish.db")]
    pub database: PathBuf,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(
        "Starting asterias server on {} (database: {})",
        args.bind,
        args.database.display()
    );

    let config = ServerConfig {
        bind_addr: args.bind,
        db_path: args.database,
    };

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
