use chrono::{DateTime, Utc};
use poem_openapi::Object;

use crate::types::db::activity;
use crate::types::internal::metrics::DashboardMetrics;
use crate::types::internal::progress::CohortProgress;

#[derive(Object, Debug, Clone, PartialEq)]
pub struct DashboardMetricsResponse {
    pub active_cadets: u64,
    /// Percentage of cadets in scope who graduated, one decimal place
    pub graduation_rate: f64,
    pub service_hours: i64,
    pub pending_applications: u64,
}

impl From<DashboardMetrics> for DashboardMetricsResponse {
    fn from(m: DashboardMetrics) -> Self {
        Self {
            active_cadets: m.active_cadets,
            graduation_rate: m.graduation_rate,
            service_hours: m.service_hours,
            pending_applications: m.pending_applications,
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct AxisAverageResponse {
    /// academic, fitness, leadership or community_service
    pub axis: String,
    pub label: String,
    pub value: i64,
}

/// Cohort means per axis; `axes` is empty for an empty cohort
#[derive(Object, Debug, Clone, PartialEq)]
pub struct CohortProgressResponse {
    pub cohort_size: u64,
    pub axes: Vec<AxisAverageResponse>,
}

impl From<CohortProgress> for CohortProgressResponse {
    fn from(p: CohortProgress) -> Self {
        Self {
            cohort_size: p.cohort_size as u64,
            axes: p
                .axes
                .into_iter()
                .map(|a| AxisAverageResponse {
                    axis: a.axis.as_str().to_string(),
                    label: a.axis.label().to_string(),
                    value: a.value,
                })
                .collect(),
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ActivityResponse {
    pub id: i32,
    /// cadet_activity, system_event or task_completed
    #[oai(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub description: Option<String>,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
    pub performed_by: Option<String>,
    pub campus: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<activity::Model> for ActivityResponse {
    fn from(m: activity::Model) -> Self {
        Self {
            id: m.id,
            activity_type: m.activity_type,
            title: m.title,
            description: m.description,
            related_id: m.related_id,
            related_type: m.related_type,
            performed_by: m.performed_by,
            campus: m.campus,
            created_at: m.created_at,
        }
    }
}
