//! TopoRoute Server - REST API for topology routing.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use toporoute_server::build_router;

/// TopoRoute Server - path finding over submitted network topologies
#[derive(Parser, Debug)]
#[command(name = "toporoute-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "TOPOROUTE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5001", env = "TOPOROUTE_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.host, args.port))?;

    let app = build_router();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("TopoRoute server listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
