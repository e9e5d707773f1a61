//! Vigil Server - Endpoint Configuration Service
//!
//! Serves endpoint records (monitoring targets) over HTTP, backed by a
//! Valkey hash per record. Polling the targets is the polling worker's
//! job, not this service's.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vigil_adapters::{StoreConfig, ValkeyEndpointRepository};
use vigil_server::{create_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "vigil-server", about = "Endpoint configuration service")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "localhost")]
    addr: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = StoreConfig::from_env()?;
    let repository = ValkeyEndpointRepository::connect(&config.url).await?;

    let state = AppState {
        repository: Arc::new(repository),
    };
    let app = create_router(state);

    let listen_to = format!("{}:{}", args.addr, args.port);
    let listener = tokio::net::TcpListener::bind(&listen_to).await?;
    info!("listen to {listen_to}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
