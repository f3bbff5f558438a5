use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::api::{auth::staff_context, ApiTags, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::ActivityCoordinator;
use crate::errors::ApiError;
use crate::providers::TokenProvider;
use crate::types::dto::dashboard::ActivityResponse;
use crate::types::internal::Campus;

pub struct ActivitiesApi {
    coordinator: Arc<ActivityCoordinator>,
    token_provider: Arc<TokenProvider>,
}

impl ActivitiesApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            coordinator: Arc::new(ActivityCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl ActivitiesApi {
    /// Most recent activity feed entries (`limit` 1-100, default 10)
    #[oai(path = "/activities", method = "get", tag = "ApiTags::Dashboard")]
    async fn recent(
        &self,
        auth: BearerAuth,
        campus: Query<Option<Campus>>,
        #[oai(validator(minimum(value = "1"), maximum(value = "100")))]
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
        let ctx = staff_context(&self.token_provider, &auth)?;
        let activities = self.coordinator.recent(&ctx, campus.0, limit.0).await?;
        Ok(Json(activities.into_iter().map(Into::into).collect()))
    }
}
