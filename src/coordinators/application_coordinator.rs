use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::config::{begin_transaction, commit_transaction};
use crate::coordinators::record_activities;
use crate::errors::InternalError;
use crate::providers::NarrativeProvider;
use crate::stores::{ActivityStore, ApplicationStore};
use crate::types::db::application;
use crate::types::dto::application::{CreateApplicationRequest, UpdateApplicationRequest};
use crate::types::internal::narrative::NarrativeAnalysis;
use crate::types::internal::{ActionOutcome, ActivityIntent, ApplicationStatus, Campus, RequestContext};

/// Intake and staff review of applications
pub struct ApplicationCoordinator {
    db: DatabaseConnection,
    application_store: Arc<ApplicationStore>,
    activity_store: Arc<ActivityStore>,
    narrative_provider: Arc<NarrativeProvider>,
}

impl ApplicationCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            application_store: Arc::clone(&app_data.application_store),
            activity_store: Arc::clone(&app_data.activity_store),
            narrative_provider: Arc::clone(&app_data.narrative_provider),
        }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        status: Option<ApplicationStatus>,
        campus: Option<Campus>,
    ) -> Result<Vec<application::Model>, InternalError> {
        self.application_store
            .list(&self.db, status, ctx.scope(campus))
            .await
    }

    pub async fn get(&self, _ctx: &RequestContext, id: i32) -> Result<application::Model, InternalError> {
        self.application_store.get(&self.db, id).await
    }

    /// Public intake; the application always starts pending
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        request: CreateApplicationRequest,
    ) -> Result<application::Model, InternalError> {
        request.validate()?;

        let txn = begin_transaction(&self.db).await?;
        let application = self
            .application_store
            .insert(&txn, request.into_active_model(Utc::now()))
            .await?;
        let application =
            record_activities(&txn, &self.activity_store, ctx, intake_outcome(application)).await?;
        commit_transaction(txn).await?;

        tracing::info!(
            request_id = %ctx.request_id,
            "Application {} received for {}",
            application.id,
            application.preferred_campus
        );
        Ok(application)
    }

    /// Record a review decision; reviewer and review time are stamped together
    pub async fn review(
        &self,
        ctx: &RequestContext,
        id: i32,
        request: UpdateApplicationRequest,
    ) -> Result<application::Model, InternalError> {
        request.validate()?;

        let current = self.application_store.get(&self.db, id).await?;
        let application = self
            .application_store
            .update(&self.db, request.apply(current, &ctx.actor_id, Utc::now()))
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            actor = %ctx.actor_id,
            "Application {} reviewed: {}",
            application.id,
            application.status
        );
        Ok(application)
    }

    pub async fn analyze(&self, ctx: &RequestContext, id: i32) -> Result<NarrativeAnalysis, InternalError> {
        let application = self.get(ctx, id).await?;
        tracing::info!(request_id = %ctx.request_id, "Analyzing application {}", application.id);
        self.narrative_provider.analyze_application(&application).await
    }
}

fn intake_outcome(application: application::Model) -> ActionOutcome<application::Model> {
    let intent = ActivityIntent::application_received(&application);
    ActionOutcome::new(application).with_activity(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::sample_application;

    #[test]
    fn test_intake_outcome_tags_preferred_campus() {
        let application = sample_application();

        let outcome = intake_outcome(application.clone());

        assert_eq!(outcome.activities.len(), 1);
        assert_eq!(outcome.activities[0].title, "New Application Received");
        assert_eq!(outcome.activities[0].campus, Some(application.preferred_campus));
        assert_eq!(outcome.value.id, application.id);
    }
}
