mod bootstrap_settings;
mod database;
mod env_provider;
mod errors;
mod logging;
mod narrative_settings;
mod secret_config;
mod secret_manager;

pub use bootstrap_settings::BootstrapSettings;
pub use database::{begin_transaction, commit_transaction, connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ConfigError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use narrative_settings::NarrativeSettings;
pub use secret_config::SecretConfig;
pub use secret_manager::SecretManager;

/// Everything the service reads from the environment at startup
#[derive(Debug)]
pub struct AppConfig {
    pub bootstrap: BootstrapSettings,
    pub secrets: SecretManager,
    pub narrative: NarrativeSettings,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env_provider(env: &impl EnvironmentProvider) -> Result<Self, ConfigError> {
        Ok(Self {
            bootstrap: BootstrapSettings::from_env_provider(env)?,
            secrets: SecretManager::from_env_provider(env)?,
            narrative: NarrativeSettings::from_env_provider(env)?,
            logging: LoggingConfig::from_env_provider(env),
        })
    }
}
