use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::config::{begin_transaction, commit_transaction};
use crate::errors::InternalError;
use crate::stores::{CadetStore, MentorshipStore};
use crate::types::db::mentorship;
use crate::types::dto::mentorship::CreateMentorshipRequest;
use crate::types::internal::RequestContext;

pub struct MentorshipCoordinator {
    db: DatabaseConnection,
    mentorship_store: Arc<MentorshipStore>,
    cadet_store: Arc<CadetStore>,
}

impl MentorshipCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            mentorship_store: Arc::clone(&app_data.mentorship_store),
            cadet_store: Arc::clone(&app_data.cadet_store),
        }
    }

    pub async fn list(&self, _ctx: &RequestContext, cadet_id: Option<i32>) -> Result<Vec<mentorship::Model>, InternalError> {
        self.mentorship_store.list(&self.db, cadet_id).await
    }

    /// Assign a mentor; the cadet must exist
    pub async fn assign(
        &self,
        ctx: &RequestContext,
        request: CreateMentorshipRequest,
    ) -> Result<mentorship::Model, InternalError> {
        request.validate()?;

        let txn = begin_transaction(&self.db).await?;
        let cadet = self.cadet_store.get(&txn, request.cadet_id).await?;
        let mentorship = self
            .mentorship_store
            .insert(&txn, request.into_active_model(Utc::now()))
            .await?;
        commit_transaction(txn).await?;

        tracing::info!(
            request_id = %ctx.request_id,
            actor = %ctx.actor_id,
            "Mentor {} assigned to cadet {}",
            mentorship.mentor_name,
            cadet.id
        );
        Ok(mentorship)
    }
}
