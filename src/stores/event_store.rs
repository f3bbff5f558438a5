use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::event;
use crate::types::internal::Campus;

/// Filter for event listings; all bounds are optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub campus: Option<Campus>,
    /// Inclusive lower bound on start time
    pub starts_from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on start time
    pub starts_before: Option<DateTime<Utc>>,
    /// Keep only events still running after this instant
    pub ends_after: Option<DateTime<Utc>>,
}

/// Data access for scheduled events
#[derive(Debug, Default)]
pub struct EventStore;

impl EventStore {
    pub fn new() -> Self {
        Self
    }

    /// List events ordered by start time
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        filter: &EventFilter,
    ) -> Result<Vec<event::Model>, InternalError> {
        let mut query = event::Entity::find();
        if let Some(campus) = filter.campus {
            query = query.filter(event::Column::Campus.eq(campus.as_str()));
        }
        if let Some(from) = filter.starts_from {
            query = query.filter(event::Column::StartTime.gte(from));
        }
        if let Some(before) = filter.starts_before {
            query = query.filter(event::Column::StartTime.lt(before));
        }
        if let Some(after) = filter.ends_after {
            query = query.filter(event::Column::EndTime.gt(after));
        }

        query
            .order_by_asc(event::Column::StartTime)
            .order_by_asc(event::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_events", e))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        model: event::ActiveModel,
    ) -> Result<event::Model, InternalError> {
        let event = model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_event", e))?;

        tracing::debug!("Inserted event {}", event.id);
        Ok(event)
    }
}
