mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "chessboard trainer stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, "chessboard trainer listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
