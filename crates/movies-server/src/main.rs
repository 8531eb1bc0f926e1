//! # Movies Server
//!
//! Entry point for the Movies API.

use movies_config::ConfigLoader;
use movies_core::{telemetry::init_logging, MoviesError, MoviesResult};
use movies_rest::create_router;
use movies_server::{startup, wiring};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Logging may not be up if configuration failed to load.
        eprintln!("Application error: {}", e);
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> MoviesResult<()> {
    let config = ConfigLoader::from_default_location().load()?;

    init_logging(
        &config.observability.log_level,
        config.observability.log_format,
    )?;

    startup::print_banner();
    info!("Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let components = wiring::build_components(&config).await?;
    let router = create_router(
        components.state,
        components.token_provider,
        &config.server,
    );

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MoviesError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(&addr, components.cache_backend);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MoviesError::Internal(format!("REST server error: {}", e)))?;

    components.database.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
