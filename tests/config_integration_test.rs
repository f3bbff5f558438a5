mod common;

use academy_backend::config::{AppConfig, ConfigError, SystemEnvironment};

const CONFIG_VARS: [&str; 10] = [
    "DATABASE_URL",
    "HOST",
    "PORT",
    "JWT_SECRET",
    "NARRATIVE_API_KEY",
    "NARRATIVE_API_URL",
    "NARRATIVE_MODEL",
    "NARRATIVE_TIMEOUT_SECS",
    "LOG_LEVEL",
    "APP_LOG_FILE",
];

#[test]
fn test_startup_config_from_process_environment() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(CONFIG_VARS.to_vec());

    unsafe {
        std::env::set_var("JWT_SECRET", common::TEST_JWT_SECRET);
        std::env::set_var("PORT", "8088");
        std::env::set_var("NARRATIVE_API_KEY", "xai-test-key");
    }

    let config = AppConfig::from_env_provider(&SystemEnvironment).expect("config should load");

    assert_eq!(config.bootstrap.server_address(), "0.0.0.0:8088");
    assert_eq!(config.bootstrap.database_url(), "sqlite://academy.db?mode=rwc");
    assert_eq!(config.secrets.jwt_secret(), common::TEST_JWT_SECRET);
    assert_eq!(config.secrets.narrative_api_key(), Some("xai-test-key"));
    assert_eq!(config.logging.log_level, "INFO");
}

#[test]
fn test_startup_fails_without_jwt_secret() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(CONFIG_VARS.to_vec());

    let err = AppConfig::from_env_provider(&SystemEnvironment).unwrap_err();

    assert_eq!(err, ConfigError::missing("JWT_SECRET"));
    assert_eq!(err.to_string(), "Required setting 'JWT_SECRET' is missing");
}

#[test]
fn test_startup_rejects_short_jwt_secret() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(CONFIG_VARS.to_vec());

    unsafe {
        std::env::set_var("JWT_SECRET", "too-short");
    }

    let err = AppConfig::from_env_provider(&SystemEnvironment).unwrap_err();

    assert!(matches!(err, ConfigError::SecretTooShort { ref name, expected: 32, actual: 9 } if name == "JWT_SECRET"));
}

#[test]
fn test_startup_rejects_unparseable_port() {
    let _lock = common::ENV_TEST_MUTEX.lock().unwrap();
    let _guard = common::EnvGuard::new(CONFIG_VARS.to_vec());

    unsafe {
        std::env::set_var("JWT_SECRET", common::TEST_JWT_SECRET);
        std::env::set_var("PORT", "eighty");
    }

    let err = AppConfig::from_env_provider(&SystemEnvironment).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "PORT"));
}
