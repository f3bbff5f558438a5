use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::DashboardCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::dashboard::{CohortProgressResponse, DashboardMetricsResponse};
use crate::types::internal::Campus;

/// Dashboard reports
pub struct DashboardApi {
    coordinator: Arc<DashboardCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl DashboardApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(DashboardCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl DashboardApi {
    /// Headline metrics for one campus or both
    #[oai(path = "/dashboard/metrics", method = "get", tag = "ApiTags::Dashboard")]
    async fn metrics(
        &self,
        auth: BearerAuth,
        campus: Query<Option<Campus>>,
    ) -> Result<Json<DashboardMetricsResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let metrics = self.coordinator.metrics(&ctx, campus.0).await?;
        Ok(Json(metrics.into()))
    }

    /// Cohort means of each progress axis
    #[oai(path = "/dashboard/progress", method = "get", tag = "ApiTags::Dashboard")]
    async fn progress(
        &self,
        auth: BearerAuth,
        campus: Query<Option<Campus>>,
    ) -> Result<Json<CohortProgressResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let progress = self.coordinator.progress(&ctx, campus.0).await?;
        Ok(Json(progress.into()))
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
