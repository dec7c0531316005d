mod config;
mod routes;

use std::process::ExitCode;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tutorhub host stopped");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "tutorhub listening");
    axum::serve(listener, app).await?;
    Ok(())
}
