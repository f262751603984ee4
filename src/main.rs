use std::process;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod state;
mod types;
mod utils;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let app = api::routes::router(AppState::new(&config));

    tracing::info!(
        environment = %config.environment,
        version = %config.version,
        "shortly listening on {}",
        config.server_addr
    );
    tracing::info!("endpoints: GET / | GET /health | GET /ready | POST /shorten");

    let listener = match tokio::net::TcpListener::bind(&config.server_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", config.server_addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}
