use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::mentorship;

#[derive(Debug, Default)]
pub struct MentorshipStore;

impl MentorshipStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        cadet_id: Option<i32>,
    ) -> Result<Vec<mentorship::Model>, InternalError> {
        let mut query = mentorship::Entity::find();
        if let Some(cadet_id) = cadet_id {
            query = query.filter(mentorship::Column::CadetId.eq(cadet_id));
        }

        query
            .order_by_desc(mentorship::Column::CreatedAt)
            .order_by_desc(mentorship::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_mentorships", e))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        model: mentorship::ActiveModel,
    ) -> Result<mentorship::Model, InternalError> {
        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_mentorship", e))
    }
}
