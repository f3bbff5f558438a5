use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::errors::InternalError;
use crate::types::db::cadet;
use crate::types::internal::progress::ProgressScores;
use crate::types::internal::Campus;

/// Data access for enrolled cadets
#[derive(Debug, Default)]
pub struct CadetStore;

impl CadetStore {
    pub fn new() -> Self {
        Self
    }

    /// List cadets newest first, optionally scoped to one campus
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        campus: Option<Campus>,
    ) -> Result<Vec<cadet::Model>, InternalError> {
        let mut query = cadet::Entity::find();
        if let Some(campus) = campus {
            query = query.filter(cadet::Column::Campus.eq(campus.as_str()));
        }

        query
            .order_by_desc(cadet::Column::CreatedAt)
            .order_by_desc(cadet::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_cadets", e))
    }

    pub async fn get(&self, conn: &impl ConnectionTrait, id: i32) -> Result<cadet::Model, InternalError> {
        cadet::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_cadet", e))?
            .ok_or_else(|| InternalError::not_found("cadet", id))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        model: cadet::ActiveModel,
    ) -> Result<cadet::Model, InternalError> {
        let cadet = model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_cadet", e))?;

        tracing::debug!("Inserted cadet {}", cadet.id);
        Ok(cadet)
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        model: cadet::ActiveModel,
    ) -> Result<cadet::Model, InternalError> {
        model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_cadet", e))
    }

    /// Progress columns of every cadet in scope
    pub async fn progress_scores(
        &self,
        conn: &impl ConnectionTrait,
        campus: Option<Campus>,
    ) -> Result<Vec<ProgressScores>, InternalError> {
        let mut query = cadet::Entity::find()
            .select_only()
            .column(cadet::Column::AcademicProgress)
            .column(cadet::Column::FitnessProgress)
            .column(cadet::Column::LeadershipProgress)
            .column(cadet::Column::ServiceHours)
            .column(cadet::Column::StartDate);
        if let Some(campus) = campus {
            query = query.filter(cadet::Column::Campus.eq(campus.as_str()));
        }

        let rows: Vec<(Option<f64>, Option<f64>, Option<f64>, Option<i32>, Option<chrono::NaiveDate>)> = query
            .into_tuple()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("cadet_progress_scores", e))?;

        Ok(rows
            .into_iter()
            .map(|(academic, fitness, leadership, service_hours, start_date)| ProgressScores {
                academic,
                fitness,
                leadership,
                service_hours,
                start_date,
            })
            .collect())
    }
}
