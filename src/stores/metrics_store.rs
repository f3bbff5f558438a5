use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Select};

use crate::errors::InternalError;
use crate::types::db::{application, cadet};
use crate::types::internal::metrics::CohortCounts;
use crate::types::internal::{ApplicationStatus, CadetStatus, Campus};

/// Aggregate queries behind the dashboard
#[derive(Debug, Default)]
pub struct MetricsStore;

impl MetricsStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn cohort_counts(
        &self,
        conn: &impl ConnectionTrait,
        campus: Option<Campus>,
    ) -> Result<CohortCounts, InternalError> {
        let total_cadets = cadets_in(campus)
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_cadets", e))?;

        let active_cadets = cadets_in(campus)
            .filter(cadet::Column::Status.eq(CadetStatus::Active.as_str()))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_active_cadets", e))?;

        let graduated_cadets = cadets_in(campus)
            .filter(cadet::Column::Status.eq(CadetStatus::Graduated.as_str()))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_graduated_cadets", e))?;

        // SUM skips NULLs and yields NULL over zero rows
        let service_hours: Option<Option<i64>> = cadets_in(campus)
            .select_only()
            .column_as(cadet::Column::ServiceHours.sum(), "service_hours")
            .into_tuple()
            .one(conn)
            .await
            .map_err(|e| InternalError::database("sum_service_hours", e))?;

        let mut pending = application::Entity::find()
            .filter(application::Column::Status.eq(ApplicationStatus::Pending.as_str()));
        if let Some(campus) = campus {
            pending = pending.filter(application::Column::PreferredCampus.eq(campus.as_str()));
        }
        let pending_applications = pending
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_pending_applications", e))?;

        Ok(CohortCounts {
            total_cadets,
            active_cadets,
            graduated_cadets,
            service_hours: service_hours.flatten().unwrap_or(0),
            pending_applications,
        })
    }
}

fn cadets_in(campus: Option<Campus>) -> Select<cadet::Entity> {
    let query = cadet::Entity::find();
    match campus {
        Some(campus) => query.filter(cadet::Column::Campus.eq(campus.as_str())),
        None => query,
    }
}
