use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::providers::{metrics_provider, progress_provider};
use crate::stores::{CadetStore, MetricsStore};
use crate::types::internal::metrics::DashboardMetrics;
use crate::types::internal::progress::CohortProgress;
use crate::types::internal::{Campus, RequestContext};

/// Read-only dashboard reports
pub struct DashboardCoordinator {
    db: DatabaseConnection,
    metrics_store: Arc<MetricsStore>,
    cadet_store: Arc<CadetStore>,
}

impl DashboardCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            metrics_store: Arc::clone(&app_data.metrics_store),
            cadet_store: Arc::clone(&app_data.cadet_store),
        }
    }

    pub async fn metrics(&self, ctx: &RequestContext, campus: Option<Campus>) -> Result<DashboardMetrics, InternalError> {
        let scope = ctx.scope(campus);
        let counts = self.metrics_store.cohort_counts(&self.db, scope).await?;

        tracing::debug!(?scope, ?counts, "Computed dashboard counts");
        Ok(metrics_provider::aggregate(&counts))
    }

    pub async fn progress(&self, ctx: &RequestContext, campus: Option<Campus>) -> Result<CohortProgress, InternalError> {
        let scores = self.cadet_store.progress_scores(&self.db, ctx.scope(campus)).await?;
        Ok(progress_provider::cohort_rollup(&scores))
    }
}
