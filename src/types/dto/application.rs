use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};

use crate::errors::internal::{ValidationError, Violations};
use crate::types::db::application;
use crate::types::internal::{ApplicationStatus, Campus};

/// Public intake form
#[derive(Object, Debug, Clone)]
pub struct CreateApplicationRequest {
    #[oai(validator(max_length = 100))]
    pub first_name: String,
    #[oai(validator(max_length = 100))]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
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
    /// Defaults to oahu
    pub preferred_campus: Option<Campus>,
}

impl CreateApplicationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        v.not_blank(&self.first_name, "first_name")
            .not_blank(&self.last_name, "last_name")
            .not_blank(&self.email, "email")
            .check(self.email.contains('@'), "email", "must be an email address")
            .not_blank(&self.phone, "phone")
            .not_blank(&self.address, "address")
            .not_blank(&self.city, "city")
            .not_blank(&self.state, "state")
            .not_blank(&self.zip_code, "zip_code")
            .not_blank(&self.parent_guardian_name, "parent_guardian_name")
            .not_blank(&self.parent_guardian_phone, "parent_guardian_phone");
        v.into_result()
    }

    /// Status is always pending on intake; review fields start empty
    pub fn into_active_model(self, now: DateTime<Utc>) -> application::ActiveModel {
        application::ActiveModel {
            id: NotSet,
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            email: Set(self.email),
            phone: Set(self.phone),
            date_of_birth: Set(self.date_of_birth),
            address: Set(self.address),
            city: Set(self.city),
            state: Set(self.state),
            zip_code: Set(self.zip_code),
            parent_guardian_name: Set(self.parent_guardian_name),
            parent_guardian_phone: Set(self.parent_guardian_phone),
            parent_guardian_email: Set(self.parent_guardian_email),
            current_school: Set(self.current_school),
            grade_level: Set(self.grade_level),
            reason_for_applying: Set(self.reason_for_applying),
            previous_challenges: Set(self.previous_challenges),
            goals: Set(self.goals),
            preferred_campus: Set(self.preferred_campus.unwrap_or_default().as_str().to_string()),
            status: Set(ApplicationStatus::Pending.as_str().to_string()),
            reviewed_by: Set(None),
            review_notes: Set(None),
            submitted_at: Set(now),
            reviewed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Staff review of an application
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateApplicationRequest {
    pub status: Option<ApplicationStatus>,
    pub review_notes: Option<String>,
}

impl UpdateApplicationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        v.check(
            self.status.is_some() || self.review_notes.is_some(),
            "status",
            "status or review_notes must be provided",
        );
        v.into_result()
    }

    /// Apply the review, stamping reviewer and review time together
    pub fn apply(self, current: application::Model, reviewer: &str, now: DateTime<Utc>) -> application::ActiveModel {
        let mut model = current.into_active_model();

        if let Some(status) = self.status {
            model.status = Set(status.as_str().to_string());
        }
        if let Some(notes) = self.review_notes {
            model.review_notes = Set(Some(notes));
        }

        model.reviewed_by = Set(Some(reviewer.to_string()));
        model.reviewed_at = Set(Some(now));
        model.updated_at = Set(now);
        model
    }
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ApplicationResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
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
    pub reviewed_by: Option<String>,
    pub review_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<application::Model> for ApplicationResponse {
    fn from(m: application::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            date_of_birth: m.date_of_birth,
            address: m.address,
            city: m.city,
            state: m.state,
            zip_code: m.zip_code,
            parent_guardian_name: m.parent_guardian_name,
            parent_guardian_phone: m.parent_guardian_phone,
            parent_guardian_email: m.parent_guardian_email,
            current_school: m.current_school,
            grade_level: m.grade_level,
            reason_for_applying: m.reason_for_applying,
            previous_challenges: m.previous_challenges,
            goals: m.goals,
            preferred_campus: m.preferred_campus,
            status: m.status,
            reviewed_by: m.reviewed_by,
            review_notes: m.review_notes,
            submitted_at: m.submitted_at,
            reviewed_at: m.reviewed_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateApplicationResponse {
    /// Application received
    #[oai(status = 201)]
    Created(Json<ApplicationResponse>),
}
