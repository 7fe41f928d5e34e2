use anyhow::Result;
use std::net::SocketAddr;

use model_atlas::config::Config;
use model_atlas::server::{self, AppState};
use model_atlas::AtlasService;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();

    let service = AtlasService::new(&config);
    let router = server::router(AppState::new(service.searcher()));

    let bind: SocketAddr = config
        .server
        .bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {:?}: {e}", config.server.bind))?;

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(%bind, model = %config.gemini.model, "Starting model-atlas search API");

    axum::serve(listener, router).await?;
    Ok(())
}
