use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Date,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub parent_guardian_name: String,
    pub parent_guardian_phone: String,
    pub parent_guardian_email: Option<String>,
    pub current_school: Option<String>,
    pub grade_level: Option<String>,
    pub reason_for_applying: Option<String>,
    pub previous_challenges: Option<String>,
    pub goals: Option<String>,
    pub preferred_campus: String,
    pub status: String,

    // Review metadata; reviewed_by and reviewed_at are always written together
    pub reviewed_by: Option<String>,
    pub review_notes: Option<String>,
    pub submitted_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
