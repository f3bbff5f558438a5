use sea_orm::entity::prelude::*;

/// Append-only activity feed entry
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub activity_type: String,
    pub title: String,
    pub description: Option<String>,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
    pub performed_by: Option<String>,
    pub campus: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
