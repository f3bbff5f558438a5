use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi};
use sea_orm::DatabaseConnection;

use crate::api::ApiTags;
use crate::app_data::AppData;
use crate::providers::NarrativeProvider;
use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi {
    db: DatabaseConnection,
    narrative_provider: Arc<NarrativeProvider>,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            narrative_provider: Arc::clone(&app_data.narrative_provider),
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports database reachability and whether narrative analysis is configured
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let database_ok = match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Database ping failed: {}", e);
                false
            }
        };

        Json(HealthResponse {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            database: if database_ok { "connected" } else { "unreachable" }.to_string(),
            narrative_configured: self.narrative_provider.is_configured(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
