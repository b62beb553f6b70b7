use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rail_ops_server::config::ServerConfig;
use rail_ops_server::dataset::Dataset;
use rail_ops_server::web::{AppState, ENDPOINTS, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load the dataset (built-in unless a file is configured)
    let dataset = match &config.data_path {
        Some(path) => match Dataset::from_json_file(path) {
            Ok(dataset) => {
                info!(path = %path.display(), "loaded dataset from file");
                dataset
            }
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Dataset::seed(),
    };
    info!(
        trains = dataset.trains.len(),
        stations = dataset.stations.len(),
        "dataset ready"
    );

    let app = create_router(AppState::new(dataset));

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Railway operations API listening on http://{addr}");
    for (method, path) in ENDPOINTS {
        info!("  {method:<4} {path}");
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("shut down");
    ExitCode::SUCCESS
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
