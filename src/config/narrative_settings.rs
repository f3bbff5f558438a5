use std::time::Duration;

use super::env_provider::EnvironmentProvider;
use super::errors::ConfigError;

/// Connection settings of the chat-completions narrative service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSettings {
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl NarrativeSettings {
    pub const DEFAULT_API_URL: &'static str = "https://api.x.ai/v1/chat/completions";
    pub const DEFAULT_MODEL: &'static str = "grok-beta";

    pub fn from_env_provider(env: &impl EnvironmentProvider) -> Result<Self, ConfigError> {
        let api_url = env.get_or("NARRATIVE_API_URL", Self::DEFAULT_API_URL);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::invalid_value(
                "NARRATIVE_API_URL",
                &api_url,
                "an http(s) URL",
            ));
        }

        let timeout_secs = env.get_parsed::<u64>("NARRATIVE_TIMEOUT_SECS", 60, "a number of seconds")?;

        Ok(Self {
            api_url,
            model: env.get_or("NARRATIVE_MODEL", Self::DEFAULT_MODEL),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_defaults() {
        let settings = NarrativeSettings::from_env_provider(&MockEnvironment::empty()).unwrap();
        assert_eq!(settings, NarrativeSettings::default());
    }

    #[test]
    fn test_overrides() {
        let env = MockEnvironment::empty().with_vars(&[
            ("NARRATIVE_API_URL", "http://localhost:11434/v1/chat/completions"),
            ("NARRATIVE_MODEL", "llama3.2"),
            ("NARRATIVE_TIMEOUT_SECS", "15"),
        ]);
        let settings = NarrativeSettings::from_env_provider(&env).unwrap();

        assert_eq!(settings.model, "llama3.2");
        assert_eq!(settings.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_non_http_url_is_rejected() {
        let env = MockEnvironment::empty().with_var("NARRATIVE_API_URL", "ftp://example.com");
        assert!(NarrativeSettings::from_env_provider(&env).is_err());
    }
}
