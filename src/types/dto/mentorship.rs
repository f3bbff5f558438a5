use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::{ActiveValue::NotSet, Set};

use crate::errors::internal::{ValidationError, Violations};
use crate::types::db::mentorship;
use crate::types::internal::MentorshipStatus;

#[derive(Object, Debug, Clone)]
pub struct CreateMentorshipRequest {
    pub cadet_id: i32,
    pub mentor_name: String,
    pub mentor_email: Option<String>,
    pub mentor_phone: Option<String>,
    /// Defaults to today
    pub assigned_date: Option<NaiveDate>,
    /// Defaults to active
    pub status: Option<MentorshipStatus>,
    /// weekly, biweekly, monthly
    pub meeting_frequency: Option<String>,
    pub last_meeting_date: Option<NaiveDate>,
    pub next_meeting_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CreateMentorshipRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        v.not_blank(&self.mentor_name, "mentor_name");
        v.into_result()
    }

    pub fn into_active_model(self, now: DateTime<Utc>) -> mentorship::ActiveModel {
        mentorship::ActiveModel {
            id: NotSet,
            cadet_id: Set(self.cadet_id),
            mentor_name: Set(self.mentor_name),
            mentor_email: Set(self.mentor_email),
            mentor_phone: Set(self.mentor_phone),
            assigned_date: Set(self.assigned_date.unwrap_or_else(|| now.date_naive())),
            status: Set(self.status.unwrap_or_default().as_str().to_string()),
            meeting_frequency: Set(self.meeting_frequency),
            last_meeting_date: Set(self.last_meeting_date),
            next_meeting_date: Set(self.next_meeting_date),
            notes: Set(self.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct MentorshipResponse {
    pub id: i32,
    pub cadet_id: i32,
    pub mentor_name: String,
    pub mentor_email: Option<String>,
    pub mentor_phone: Option<String>,
    pub assigned_date: NaiveDate,
    pub status: String,
    pub meeting_frequency: Option<String>,
    pub last_meeting_date: Option<NaiveDate>,
    pub next_meeting_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<mentorship::Model> for MentorshipResponse {
    fn from(m: mentorship::Model) -> Self {
        Self {
            id: m.id,
            cadet_id: m.cadet_id,
            mentor_name: m.mentor_name,
            mentor_email: m.mentor_email,
            mentor_phone: m.mentor_phone,
            assigned_date: m.assigned_date,
            status: m.status,
            meeting_frequency: m.meeting_frequency,
            last_meeting_date: m.last_meeting_date,
            next_meeting_date: m.next_meeting_date,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateMentorshipResponse {
    /// Mentor assigned
    #[oai(status = 201)]
    Created(Json<MentorshipResponse>),
}
