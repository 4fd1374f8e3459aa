//! Centering analysis HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use centering::annotate::RuleAnnotator;
use centering::server::{router, AppState};

#[derive(Parser, Debug)]
#[command(name = "centering-server", about = "Sentence centering analysis over HTTP", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000", env = "CENTERING_ADDR")]
    addr: SocketAddr,

    /// Allowed CORS origin (repeat for several)
    #[arg(
        long = "allow-origin",
        default_value = "http://localhost:3000",
        env = "CENTERING_ALLOW_ORIGIN"
    )]
    allow_origin: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("centering=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    // Reject bad origins at startup instead of silently dropping them.
    let origins = args
        .allow_origin
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| anyhow::anyhow!("invalid CORS origin: {o}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let state = AppState::new(Arc::new(RuleAnnotator::new()));
    let app = router(state, origins);

    tracing::info!(addr = %args.addr, "listening");
    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
