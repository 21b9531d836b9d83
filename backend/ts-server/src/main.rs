use ts_config::{Config, logger};
use ts_core::ShutdownCoordinator;
use ts_server::{AppState, build_router, error::ServerError};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ts-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let shutdown = ShutdownCoordinator::new();
    let app_state = AppState::from_config(&config, shutdown.clone()).await?;
    info!(
        "Snapshot: {} rows, users file: {}",
        app_state.snapshot.len(),
        app_state.users.path().display()
    );

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Actual address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}
