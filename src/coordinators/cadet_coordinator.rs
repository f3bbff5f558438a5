use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::config::{begin_transaction, commit_transaction};
use crate::coordinators::record_activities;
use crate::errors::InternalError;
use crate::providers::{progress_provider, NarrativeProvider};
use crate::stores::{ActivityStore, CadetStore};
use crate::types::db::cadet;
use crate::types::dto::cadet::{CreateCadetRequest, UpdateCadetRequest};
use crate::types::internal::narrative::NarrativeAnalysis;
use crate::types::internal::progress::{CadetProgressSummary, ProgressScores};
use crate::types::internal::{ActionOutcome, ActivityIntent, Campus, RequestContext};

/// Cadet enrollment, updates and per-cadet reporting
pub struct CadetCoordinator {
    db: DatabaseConnection,
    cadet_store: Arc<CadetStore>,
    activity_store: Arc<ActivityStore>,
    narrative_provider: Arc<NarrativeProvider>,
}

impl CadetCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            cadet_store: Arc::clone(&app_data.cadet_store),
            activity_store: Arc::clone(&app_data.activity_store),
            narrative_provider: Arc::clone(&app_data.narrative_provider),
        }
    }

    pub async fn list(&self, ctx: &RequestContext, campus: Option<Campus>) -> Result<Vec<cadet::Model>, InternalError> {
        self.cadet_store.list(&self.db, ctx.scope(campus)).await
    }

    pub async fn get(&self, _ctx: &RequestContext, id: i32) -> Result<cadet::Model, InternalError> {
        self.cadet_store.get(&self.db, id).await
    }

    /// Enroll a cadet and append the "New Cadet Added" entry atomically
    pub async fn create(&self, ctx: &RequestContext, request: CreateCadetRequest) -> Result<cadet::Model, InternalError> {
        request.validate()?;

        let txn = begin_transaction(&self.db).await?;
        let cadet = self
            .cadet_store
            .insert(&txn, request.into_active_model(Utc::now()))
            .await?;
        let cadet = record_activities(&txn, &self.activity_store, ctx, enrollment_outcome(cadet)).await?;
        commit_transaction(txn).await?;

        tracing::info!(
            request_id = %ctx.request_id,
            actor = %ctx.actor_id,
            "Cadet {} enrolled at {}",
            cadet.id,
            cadet.campus
        );
        Ok(cadet)
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i32,
        request: UpdateCadetRequest,
    ) -> Result<cadet::Model, InternalError> {
        request.validate()?;

        let current = self.cadet_store.get(&self.db, id).await?;
        let cadet = self
            .cadet_store
            .update(&self.db, request.apply(current, Utc::now()))
            .await?;

        tracing::info!(request_id = %ctx.request_id, actor = %ctx.actor_id, "Cadet {} updated", cadet.id);
        Ok(cadet)
    }

    pub async fn progress(&self, ctx: &RequestContext, id: i32) -> Result<CadetProgressSummary, InternalError> {
        let cadet = self.get(ctx, id).await?;
        Ok(progress_provider::cadet_summary(
            &ProgressScores::from(&cadet),
            Utc::now().date_naive(),
        ))
    }

    pub async fn insights(&self, ctx: &RequestContext, id: i32) -> Result<NarrativeAnalysis, InternalError> {
        let cadet = self.get(ctx, id).await?;
        tracing::info!(request_id = %ctx.request_id, "Generating insights for cadet {}", cadet.id);
        self.narrative_provider.cadet_insights(&cadet).await
    }
}

fn enrollment_outcome(cadet: cadet::Model) -> ActionOutcome<cadet::Model> {
    let intent = ActivityIntent::cadet_added(&cadet);
    ActionOutcome::new(cadet).with_activity(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::sample_cadet;

    #[test]
    fn test_enrollment_outcome_carries_one_cadet_activity() {
        let cadet = sample_cadet();

        let outcome = enrollment_outcome(cadet.clone());

        assert_eq!(outcome.value, cadet);
        assert_eq!(outcome.activities.len(), 1);
        assert_eq!(outcome.activities[0].title, "New Cadet Added");
        assert_eq!(outcome.activities[0].related_id, Some(cadet.id));
    }
}
