// Common test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use academy_backend::config::{AppConfig, EnvironmentProvider};
use academy_backend::types::internal::RequestContext;
use academy_backend::AppData;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

pub const TEST_JWT_SECRET: &str = "integration-secret-with-at-least-32-chars";

/// Environment provider backed by a fixed map
#[derive(Debug, Default, Clone)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
}

impl FixedEnvironment {
    pub fn with_vars(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }
}

impl EnvironmentProvider for FixedEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// AppData built the same way as at startup, without a narrative API key
pub async fn setup_app_data() -> Arc<AppData> {
    let env = FixedEnvironment::with_vars(&[("JWT_SECRET", TEST_JWT_SECRET)]);
    let config = AppConfig::from_env_provider(&env).expect("Failed to load test config");
    let db = setup_test_db().await;
    Arc::new(AppData::init(db, config).expect("Failed to initialize AppData"))
}

/// Request context of a staff member, built from a freshly issued token
pub fn staff_context(app_data: &AppData, subject: &str) -> RequestContext {
    let token = app_data
        .token_provider
        .issue(subject, None, None, 15)
        .expect("Failed to issue token");
    let claims = app_data
        .token_provider
        .validate(&token)
        .expect("Failed to validate token");
    RequestContext::for_staff(claims)
}

/// Helper to manage environment variables in tests
///
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Global mutex for tests that modify environment variables
///
/// Environment variables are process-global, so tests that modify them
/// must run serially to avoid race conditions.
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
