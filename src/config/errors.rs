use thiserror::Error;

/// Startup configuration failure; always names the offending variable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required setting '{name}' is missing")]
    Missing { name: String },

    #[error("Setting '{name}' has invalid value '{value}': expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: String,
    },

    #[error("Secret '{name}' must be at least {expected} characters, got {actual}")]
    SecretTooShort {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl ConfigError {
    pub fn missing(name: &str) -> Self {
        Self::Missing {
            name: name.to_string(),
        }
    }

    pub fn invalid_value(name: &str, value: &str, expected: &str) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }
}
