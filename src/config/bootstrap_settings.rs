use std::fmt;

use super::env_provider::EnvironmentProvider;
use super::errors::ConfigError;

/// Infrastructure settings needed before anything else starts
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    pub const DEFAULT_DATABASE_URL: &'static str = "sqlite://academy.db?mode=rwc";

    pub fn from_env_provider(env: &impl EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env.get_or("DATABASE_URL", Self::DEFAULT_DATABASE_URL);
        let server_host = env.get_or("HOST", "0.0.0.0");
        let server_port = env.get_parsed::<u16>("PORT", 3000, "a port number between 1 and 65535")?;

        if server_port == 0 {
            return Err(ConfigError::invalid_value(
                "PORT",
                "0",
                "a port number between 1 and 65535",
            ));
        }

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env = MockEnvironment::empty().with_vars(&[
            ("DATABASE_URL", "postgres://localhost/academy"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]);

        let settings = BootstrapSettings::from_env_provider(&env).unwrap();

        assert_eq!(settings.database_url(), "postgres://localhost/academy");
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(&MockEnvironment::empty()).unwrap();

        assert_eq!(settings.database_url(), BootstrapSettings::DEFAULT_DATABASE_URL);
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let env = MockEnvironment::empty().with_var("PORT", "0");
        let err = BootstrapSettings::from_env_provider(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "PORT"));
    }
}
