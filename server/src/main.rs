use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{MongoStore, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = serve().await {
        tracing::error!("server failed: {e:#}");
        std::process::exit(1);
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;
    let store = MongoStore::connect(&config.connection_string)
        .await
        .context("failed to create mongodb client")?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");

    let router = todo_server::app(Arc::new(store), &config.allowed_origin);
    todo_server::run(listener, router).await.context("server error")?;
    tracing::info!("server stopped");
    Ok(())
}
