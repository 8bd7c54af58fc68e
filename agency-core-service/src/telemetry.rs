use agency_core_api::{ApiError, ApiResult, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// The filter comes from `AGENCY_LOG` when set, otherwise from the
/// configured directive. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> ApiResult<()> {
    let filter = EnvFilter::try_from_env("AGENCY_LOG")
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| ApiError::ConfigError(format!("Invalid log filter '{}': {e}", config.filter)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ApiError::InternalError(format!("Failed to install tracing subscriber: {e}")))
}
