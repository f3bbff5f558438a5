use std::fmt;

use super::env_provider::EnvironmentProvider;
use super::errors::ConfigError;
use super::secret_config::SecretConfig;

/// Centralized holder of application secrets
pub struct SecretManager {
    jwt_secret: String,
    narrative_api_key: Option<String>,
}

impl SecretManager {
    /// Load and validate all secrets
    pub fn from_env_provider(env: &impl EnvironmentProvider) -> Result<Self, ConfigError> {
        let jwt_secret = Self::load_secret(env, &Self::jwt_config())?
            .ok_or_else(|| ConfigError::missing("JWT_SECRET"))?;
        let narrative_api_key = Self::load_secret(env, &Self::narrative_key_config())?;

        Ok(Self {
            jwt_secret,
            narrative_api_key,
        })
    }

    /// Secret shared with the identity provider for staff tokens
    fn jwt_config() -> SecretConfig {
        SecretConfig::env_var("JWT_SECRET").required(true).min_length(32)
    }

    /// API key of the narrative-generation service; analysis endpoints fail without it
    fn narrative_key_config() -> SecretConfig {
        SecretConfig::env_var("NARRATIVE_API_KEY").required(false)
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn narrative_api_key(&self) -> Option<&str> {
        self.narrative_api_key.as_deref()
    }

    pub(crate) fn load_secret(
        env: &impl EnvironmentProvider,
        config: &SecretConfig,
    ) -> Result<Option<String>, ConfigError> {
        let value = match env.get_var(&config.name).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None if !config.required => return Ok(None),
            None => return Err(ConfigError::missing(&config.name)),
        };

        if let Some(min_len) = config.min_length {
            if value.len() < min_len {
                return Err(ConfigError::SecretTooShort {
                    name: config.name.clone(),
                    expected: min_len,
                    actual: value.len(),
                });
            }
        }

        Ok(Some(value))
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field(
                "narrative_api_key",
                &self.narrative_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    const VALID_SECRET: &str = "this-is-a-valid-jwt-secret-with-32-characters";

    #[test]
    fn test_successful_initialization_with_valid_secrets() {
        let env = MockEnvironment::empty()
            .with_var("JWT_SECRET", VALID_SECRET)
            .with_var("NARRATIVE_API_KEY", "xai-key");

        let manager = SecretManager::from_env_provider(&env).unwrap();
        assert_eq!(manager.jwt_secret(), VALID_SECRET);
        assert_eq!(manager.narrative_api_key(), Some("xai-key"));
    }

    #[test]
    fn test_missing_jwt_secret() {
        let err = SecretManager::from_env_provider(&MockEnvironment::empty()).unwrap_err();
        assert_eq!(err, ConfigError::missing("JWT_SECRET"));
    }

    #[test]
    fn test_short_jwt_secret() {
        let env = MockEnvironment::empty().with_var("JWT_SECRET", "short");
        let err = SecretManager::from_env_provider(&env).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SecretTooShort {
                name: "JWT_SECRET".to_string(),
                expected: 32,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_narrative_key_is_optional() {
        let env = MockEnvironment::empty().with_var("JWT_SECRET", VALID_SECRET);
        let manager = SecretManager::from_env_provider(&env).unwrap();
        assert_eq!(manager.narrative_api_key(), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let env = MockEnvironment::empty()
            .with_var("JWT_SECRET", VALID_SECRET)
            .with_var("NARRATIVE_API_KEY", "xai-key");
        let manager = SecretManager::from_env_provider(&env).unwrap();

        let debug = format!("{:?}", manager);
        assert!(!debug.contains(VALID_SECRET));
        assert!(!debug.contains("xai-key"));
    }
}
