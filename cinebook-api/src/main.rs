use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cinebook_api::{app, AppState};
use cinebook_store::app_config::{Config, StoreBackend};
use cinebook_store::{MemoryStore, MongoClient, Repositories};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "cinebook_api=debug,cinebook_core=debug,cinebook_store=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;

    let repositories = match config.database.backend {
        StoreBackend::Mongodb => {
            let client = MongoClient::new(&config.database.url, &config.database.name)
                .await
                .context("Failed to connect to MongoDB")?;
            Repositories::mongo(&client)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on exit");
            Repositories::memory(Arc::new(MemoryStore::new()))
        }
    };

    let app = app(AppState::new(repositories));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on port {}", config.server.port);

    axum::serve(listener, app).await?;
    Ok(())
}
