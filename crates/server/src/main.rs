//! Bulletin board server binary.

use bulletin_server::{AppState, Config, route};
use salvo::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let state = AppState::prepare(&config).await?;
    tracing::info!(database = %config.database_url, seed = config.seed, "database ready");

    let acceptor = TcpListener::new(config.listen_addr.clone()).try_bind().await?;
    tracing::info!(addr = %config.listen_addr, "listening");
    Server::new(acceptor).serve(route(state)).await;
    Ok(())
}
