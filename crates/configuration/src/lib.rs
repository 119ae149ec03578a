use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{ExchangeRates, LoggingSettings, OutputFormat, OutputSettings, Settings};

/// Prefix of environment variables overriding file settings,
/// e.g. `SIMCHARTS__EXCHANGE_RATES__USD=1.1`.
pub const ENV_PREFIX: &str = "SIMCHARTS";

/// Loads the application configuration.
///
/// Reads `path` if it exists (it is only required when `required` is set),
/// layers `SIMCHARTS__*` environment variables on top, deserializes the
/// result into our strongly-typed `Settings` struct and validates it.
pub fn load_settings(path: &Path, required: bool) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(settings)
}
