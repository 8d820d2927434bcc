pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod genres;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::time::Duration;

pub use config::Config;
pub use db::create_pool;
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let pool = create_pool(&config).await?;
    seed::seed_movies(&pool).await?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECS))
        .build()?;

    let state = AppState::new(pool, config, http_client);
    let app = api::create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
