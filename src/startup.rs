use crate::components::OfficeHoursValidator;
use crate::config::Config;
use crate::error::{server_error, Error};
use crate::shutdown;
use crate::web::{router, AppState};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Bind the listener and serve the scheduling endpoints until a shutdown signal
pub async fn start_server(config: Config) -> miette::Result<()> {
    let policy = &config.office_hours;
    info!(
        "Office hours {}-{} on {}",
        policy.opening_label(),
        policy.closing_label(),
        policy.describe_weekdays()
    );

    let addr = config.socket_addr()?;
    let state = AppState::new(OfficeHoursValidator::new(config.office_hours)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| server_error(&format!("Failed to bind {}: {}", addr, e)))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(|e| server_error(&format!("Server stopped unexpectedly: {}", e)))?;

    info!("Server shut down successfully");
    Ok(())
}
