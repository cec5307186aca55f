//! Unimart hello-world function host
//!
//! Serves the stateless hello-world function locally so the front end can
//! be developed against it without deploying to the backend platform.
//!
//! Usage:
//!   unimart-echo --port 54321
//!
//! Every option can also be set through the environment
//! (`UNIMART_ECHO_HOST`, `UNIMART_ECHO_PORT`, `UNIMART_ECHO_VERBOSE`).

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use unimart_echo::{build_router, HELLO_WORLD_PATH};

#[derive(Parser, Debug)]
#[command(name = "unimart-echo")]
#[command(about = "Unimart hello-world function host")]
struct Args {
    /// Address to bind
    #[arg(long, env = "UNIMART_ECHO_HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP port to listen on
    #[arg(short, long, env = "UNIMART_ECHO_PORT", default_value = "54321")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long, env = "UNIMART_ECHO_VERBOSE")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Hello-world function listening on http://{}{}", addr, HELLO_WORLD_PATH);

    axum::serve(listener, build_router())
        .await
        .context("HTTP server failed")?;
    Ok(())
}
