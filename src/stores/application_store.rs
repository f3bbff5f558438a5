use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::application;
use crate::types::internal::{ApplicationStatus, Campus};

/// Data access for intake applications; rows are never deleted
#[derive(Debug, Default)]
pub struct ApplicationStore;

impl ApplicationStore {
    pub fn new() -> Self {
        Self
    }

    /// List applications newest submission first
    ///
    /// Campus scope applies to the applicant's preferred campus.
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        status: Option<ApplicationStatus>,
        campus: Option<Campus>,
    ) -> Result<Vec<application::Model>, InternalError> {
        let mut query = application::Entity::find();
        if let Some(status) = status {
            query = query.filter(application::Column::Status.eq(status.as_str()));
        }
        if let Some(campus) = campus {
            query = query.filter(application::Column::PreferredCampus.eq(campus.as_str()));
        }

        query
            .order_by_desc(application::Column::SubmittedAt)
            .order_by_desc(application::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_applications", e))
    }

    pub async fn get(&self, conn: &impl ConnectionTrait, id: i32) -> Result<application::Model, InternalError> {
        application::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_application", e))?
            .ok_or_else(|| InternalError::not_found("application", id))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        model: application::ActiveModel,
    ) -> Result<application::Model, InternalError> {
        let application = model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_application", e))?;

        tracing::debug!("Inserted application {}", application.id);
        Ok(application)
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        model: application::ActiveModel,
    ) -> Result<application::Model, InternalError> {
        model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_application", e))
    }
}
