use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mentorships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cadet_id: i32,
    pub mentor_name: String,
    pub mentor_email: Option<String>,
    pub mentor_phone: Option<String>,
    pub assigned_date: Date,
    pub status: String,
    pub meeting_frequency: Option<String>,
    pub last_meeting_date: Option<Date>,
    pub next_meeting_date: Option<Date>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cadet::Entity",
        from = "Column::CadetId",
        to = "super::cadet::Column::Id",
        on_delete = "Cascade"
    )]
    Cadet,
}

impl Related<super::cadet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cadet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
