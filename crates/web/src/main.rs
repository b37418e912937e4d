use std::sync::Arc;

use error_stack::report;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use device_registry_core::adapters::config::app_config::AppConfig;
use device_registry_core::adapters::sheets::spreadsheet_manager::SpreadsheetManager;
use device_registry_core::error::RegistryError;
use device_registry_core::ports::registration_sink::RegistrationSink;

mod handlers;
mod pages;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> error_stack::Result<(), RegistryError> {
    setup_tracing();

    let config = AppConfig::load()?;
    info!(bind_addr = %config.server.bind_addr, "starting device registry");

    // One connection attempt, before any traffic. A failure either aborts
    // (fail_fast) or leaves the server in degraded mode with the error
    // captured for the submission page.
    let connection = match SpreadsheetManager::connect(config.sheets.clone()).await {
        Ok(manager) => Ok(Arc::new(manager) as Arc<dyn RegistrationSink>),
        Err(report) => {
            if config.sheets.fail_fast {
                return Err(report);
            }
            error!("spreadsheet connection failed, serving in degraded mode: {report:?}");
            Err(report)
        }
    };

    let app = routes::router(AppState::new(connection));

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr.as_str())
        .await
        .map_err(|e| {
            report!(RegistryError::Configuration {
                details: format!("could not bind HTTP listener on {}: {}", config.server.bind_addr, e),
            })
        })?;

    info!("listening on {}", config.server.bind_addr);
    axum::serve(listener, app).await.map_err(|e| {
        report!(RegistryError::Configuration {
            details: format!("HTTP server terminated unexpectedly: {}", e),
        })
    })?;

    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
