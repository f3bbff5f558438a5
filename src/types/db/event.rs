use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub location: Option<String>,
    pub campus: String,
    pub max_participants: Option<i32>,
    pub current_participants: Option<i32>,
    pub is_required: Option<bool>,
    pub created_by: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
