use std::sync::Arc;

use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi,
};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::ApplicationCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::application::{
    ApplicationResponse, CreateApplicationRequest, CreateApplicationResponse, UpdateApplicationRequest,
};
use crate::types::dto::narrative::NarrativeAnalysisResponse;
use crate::types::internal::{ApplicationStatus, Campus, RequestContext};

/// Intake and review endpoints
pub struct ApplicationsApi {
    coordinator: Arc<ApplicationCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl ApplicationsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(ApplicationCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl ApplicationsApi {
    /// List applications, newest submission first
    ///
    /// `campus` filters on the preferred campus
    #[oai(path = "/applications", method = "get", tag = "ApiTags::Applications")]
    async fn list(
        &self,
        auth: BearerAuth,
        status: Query<Option<ApplicationStatus>>,
        campus: Query<Option<Campus>>,
    ) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let applications = self.coordinator.list(&ctx, status.0, campus.0).await?;
        Ok(Json(applications.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/applications/:id", method = "get", tag = "ApiTags::Applications")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<ApplicationResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let application = self.coordinator.get(&ctx, id.0).await?;
        Ok(Json(application.into()))
    }

    /// Public intake form; no token required
    #[oai(path = "/applications", method = "post", tag = "ApiTags::Applications")]
    async fn submit(&self, body: Json<CreateApplicationRequest>) -> Result<CreateApplicationResponse, ApiError> {
        let ctx = RequestContext::for_public();
        let application = self.coordinator.submit(&ctx, body.0).await?;
        Ok(CreateApplicationResponse::Created(Json(application.into())))
    }

    /// Record a review decision
    #[oai(path = "/applications/:id", method = "patch", tag = "ApiTags::Applications")]
    async fn review(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateApplicationRequest>,
    ) -> Result<Json<ApplicationResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let application = self.coordinator.review(&ctx, id.0, body.0).await?;
        Ok(Json(application.into()))
    }

    /// Narrative suitability assessment
    #[oai(path = "/applications/:id/analyze", method = "post", tag = "ApiTags::Applications")]
    async fn analyze(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<NarrativeAnalysisResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let analysis = self.coordinator.analyze(&ctx, id.0).await?;
        Ok(Json(analysis.into()))
    }
}

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;
