//! testbed-server binary
//!
//! Resolves configuration, builds the connection pool from the normalized
//! descriptor, and runs the HTTP server until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use testbed_server::config::AppConfig;
use testbed_server::db::create_pool;
use testbed_server::http::run_server;

#[derive(Parser, Debug)]
#[command(name = "testbed-server", version, about = "CRUD API over the TestProjects table")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Database connection descriptor, attribute form or postgres:// URL form.
    /// Falls back to the DATABASE_URL environment variable.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::resolve(args.bind, args.database_url)?;

    let pool = create_pool(&config.database_url).context("invalid connection descriptor")?;

    run_server(pool, config.bind_addr).await?;
    Ok(())
}
