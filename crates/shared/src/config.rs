//! Application configuration management.

use chrono::NaiveDate;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Demo harness configuration.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Demo harness configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// Pins the harness clock to a fixed date (ISO 8601, e.g. `2026-06-01`).
    /// Unset means the real system clock.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STAYLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
