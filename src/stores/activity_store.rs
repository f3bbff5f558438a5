use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

use crate::errors::InternalError;
use crate::types::db::activity;
use crate::types::internal::{ActivityIntent, Campus};

/// Append-only activity feed
#[derive(Debug, Default)]
pub struct ActivityStore;

impl ActivityStore {
    pub fn new() -> Self {
        Self
    }

    /// Most recent entries first
    pub async fn recent(
        &self,
        conn: &impl ConnectionTrait,
        campus: Option<Campus>,
        limit: u64,
    ) -> Result<Vec<activity::Model>, InternalError> {
        let mut query = activity::Entity::find();
        if let Some(campus) = campus {
            query = query.filter(activity::Column::Campus.eq(campus.as_str()));
        }

        query
            .order_by_desc(activity::Column::CreatedAt)
            .order_by_desc(activity::Column::Id)
            .limit(limit)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("recent_activities", e))
    }

    /// Write one intent, stamped with the acting user
    pub async fn record(
        &self,
        conn: &impl ConnectionTrait,
        intent: ActivityIntent,
        performed_by: &str,
    ) -> Result<activity::Model, InternalError> {
        let model = activity::ActiveModel {
            id: NotSet,
            activity_type: Set(intent.activity_type.as_str().to_string()),
            title: Set(intent.title),
            description: Set(intent.description),
            related_id: Set(intent.related_id),
            related_type: Set(intent.related_type),
            performed_by: Set(Some(performed_by.to_string())),
            campus: Set(intent.campus),
            created_at: Set(Utc::now()),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_activity", e))
    }
}
