use std::sync::Arc;

use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi,
};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::CadetCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::cadet::{
    CadetProgressResponse, CadetResponse, CreateCadetRequest, CreateCadetResponse, UpdateCadetRequest,
};
use crate::types::dto::narrative::NarrativeAnalysisResponse;
use crate::types::internal::Campus;

/// Cadet management endpoints
pub struct CadetsApi {
    coordinator: Arc<CadetCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl CadetsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(CadetCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl CadetsApi {
    /// List cadets, newest first
    #[oai(path = "/cadets", method = "get", tag = "ApiTags::Cadets")]
    async fn list(&self, auth: BearerAuth, campus: Query<Option<Campus>>) -> Result<Json<Vec<CadetResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let cadets = self.coordinator.list(&ctx, campus.0).await?;
        Ok(Json(cadets.into_iter().map(Into::into).collect()))
    }

    #[oai(path = "/cadets/:id", method = "get", tag = "ApiTags::Cadets")]
    async fn get(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<CadetResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let cadet = self.coordinator.get(&ctx, id.0).await?;
        Ok(Json(cadet.into()))
    }

    /// Enroll a cadet; appends a feed entry
    #[oai(path = "/cadets", method = "post", tag = "ApiTags::Cadets")]
    async fn create(&self, auth: BearerAuth, body: Json<CreateCadetRequest>) -> Result<CreateCadetResponse, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let cadet = self.coordinator.create(&ctx, body.0).await?;
        Ok(CreateCadetResponse::Created(Json(cadet.into())))
    }

    /// Partial update
    #[oai(path = "/cadets/:id", method = "patch", tag = "ApiTags::Cadets")]
    async fn update(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateCadetRequest>,
    ) -> Result<Json<CadetResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let cadet = self.coordinator.update(&ctx, id.0, body.0).await?;
        Ok(Json(cadet.into()))
    }

    /// Progress bands, program completion and milestones
    #[oai(path = "/cadets/:id/progress", method = "get", tag = "ApiTags::Cadets")]
    async fn progress(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<CadetProgressResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let summary = self.coordinator.progress(&ctx, id.0).await?;
        Ok(Json(CadetProgressResponse::new(id.0, &summary)))
    }

    /// Narrative development insights
    #[oai(path = "/cadets/:id/insights", method = "post", tag = "ApiTags::Cadets")]
    async fn insights(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<NarrativeAnalysisResponse>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let analysis = self.coordinator.insights(&ctx, id.0).await?;
        Ok(Json(analysis.into()))
    }
}

#[cfg(test)]
#[path = "cadets_test.rs"]
mod cadets_test;
