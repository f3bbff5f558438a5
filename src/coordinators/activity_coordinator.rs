use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::stores::ActivityStore;
use crate::types::db::activity;
use crate::types::internal::{Campus, RequestContext};

pub const DEFAULT_ACTIVITY_LIMIT: u64 = 10;
pub const MAX_ACTIVITY_LIMIT: u64 = 100;

pub struct ActivityCoordinator {
    db: DatabaseConnection,
    activity_store: Arc<ActivityStore>,
}

impl ActivityCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            activity_store: Arc::clone(&app_data.activity_store),
        }
    }

    /// Newest entries first, capped at `MAX_ACTIVITY_LIMIT`
    pub async fn recent(
        &self,
        ctx: &RequestContext,
        campus: Option<Campus>,
        limit: Option<u64>,
    ) -> Result<Vec<activity::Model>, InternalError> {
        let limit = limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT).clamp(1, MAX_ACTIVITY_LIMIT);
        self.activity_store.recent(&self.db, ctx.scope(campus), limit).await
    }
}
