use clap::Parser;
use std::sync::Arc;
use tanakh_search::server::{self, AppState};
use tanakh_search::{Searcher, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    let corpus = config.open_corpus()?;
    let state = Arc::new(AppState::new(Searcher::new(corpus)));
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
