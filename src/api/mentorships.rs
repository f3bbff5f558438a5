use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::MentorshipCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::mentorship::{CreateMentorshipRequest, CreateMentorshipResponse, MentorshipResponse};

pub struct MentorshipsApi {
    coordinator: Arc<MentorshipCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl MentorshipsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(MentorshipCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl MentorshipsApi {
    #[oai(path = "/mentorships", method = "get", tag = "ApiTags::Mentorships")]
    async fn list(&self, auth: BearerAuth, cadet_id: Query<Option<i32>>) -> Result<Json<Vec<MentorshipResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let mentorships = self.coordinator.list(&ctx, cadet_id.0).await?;
        Ok(Json(mentorships.into_iter().map(Into::into).collect()))
    }

    /// Assign a mentor to an existing cadet
    #[oai(path = "/mentorships", method = "post", tag = "ApiTags::Mentorships")]
    async fn assign(
        &self,
        auth: BearerAuth,
        body: Json<CreateMentorshipRequest>,
    ) -> Result<CreateMentorshipResponse, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let mentorship = self.coordinator.assign(&ctx, body.0).await?;
        Ok(CreateMentorshipResponse::Created(Json(mentorship.into())))
    }
}

#[cfg(test)]
#[path = "mentorships_test.rs"]
mod mentorships_test;
