use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};

use crate::errors::internal::{ValidationError, Violations};
use crate::providers::metrics_provider::round_one_decimal;
use crate::types::db::cadet;
use crate::types::internal::progress::{AxisScore, CadetProgressSummary};
use crate::types::internal::{CadetStatus, Campus};

/// Request body for enrolling a cadet
#[derive(Object, Debug, Clone)]
pub struct CreateCadetRequest {
    #[oai(validator(max_length = 100))]
    pub first_name: String,
    #[oai(validator(max_length = 100))]
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relation: String,
    /// Defaults to oahu
    pub campus: Option<Campus>,
    pub class_number: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub graduation_date: Option<NaiveDate>,
    /// Defaults to active
    pub status: Option<CadetStatus>,
    /// 0-100
    pub academic_progress: Option<f64>,
    /// 0-100
    pub fitness_progress: Option<f64>,
    /// 0-100
    pub leadership_progress: Option<f64>,
    pub service_hours: Option<i32>,
    pub notes: Option<String>,
}

impl CreateCadetRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        v.not_blank(&self.first_name, "first_name")
            .not_blank(&self.last_name, "last_name")
            .not_blank(&self.emergency_contact_name, "emergency_contact_name")
            .not_blank(&self.emergency_contact_phone, "emergency_contact_phone")
            .not_blank(&self.emergency_contact_relation, "emergency_contact_relation")
            .percentage(self.academic_progress, "academic_progress")
            .percentage(self.fitness_progress, "fitness_progress")
            .percentage(self.leadership_progress, "leadership_progress")
            .non_negative(self.service_hours, "service_hours");
        v.into_result()
    }

    pub fn into_active_model(self, now: DateTime<Utc>) -> cadet::ActiveModel {
        cadet::ActiveModel {
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
            emergency_contact_name: Set(self.emergency_contact_name),
            emergency_contact_phone: Set(self.emergency_contact_phone),
            emergency_contact_relation: Set(self.emergency_contact_relation),
            campus: Set(self.campus.unwrap_or_default().as_str().to_string()),
            class_number: Set(self.class_number),
            start_date: Set(self.start_date),
            graduation_date: Set(self.graduation_date),
            status: Set(self.status.unwrap_or_default().as_str().to_string()),
            academic_progress: Set(Some(self.academic_progress.unwrap_or(0.0))),
            fitness_progress: Set(Some(self.fitness_progress.unwrap_or(0.0))),
            leadership_progress: Set(Some(self.leadership_progress.unwrap_or(0.0))),
            service_hours: Set(Some(self.service_hours.unwrap_or(0))),
            notes: Set(self.notes),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Partial update; absent fields are left unchanged
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateCadetRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relation: Option<String>,
    pub campus: Option<Campus>,
    pub class_number: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub graduation_date: Option<NaiveDate>,
    pub status: Option<CadetStatus>,
    pub academic_progress: Option<f64>,
    pub fitness_progress: Option<f64>,
    pub leadership_progress: Option<f64>,
    pub service_hours: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateCadetRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Violations::new();
        for (value, field) in [
            (&self.first_name, "first_name"),
            (&self.last_name, "last_name"),
            (&self.emergency_contact_name, "emergency_contact_name"),
            (&self.emergency_contact_phone, "emergency_contact_phone"),
            (&self.emergency_contact_relation, "emergency_contact_relation"),
        ] {
            if let Some(value) = value {
                v.not_blank(value, field);
            }
        }
        v.percentage(self.academic_progress, "academic_progress")
            .percentage(self.fitness_progress, "fitness_progress")
            .percentage(self.leadership_progress, "leadership_progress")
            .non_negative(self.service_hours, "service_hours");
        v.into_result()
    }

    /// Overlay the present fields onto `current`
    pub fn apply(self, current: cadet::Model, now: DateTime<Utc>) -> cadet::ActiveModel {
        let mut model = current.into_active_model();

        if let Some(value) = self.first_name {
            model.first_name = Set(value);
        }
        if let Some(value) = self.last_name {
            model.last_name = Set(value);
        }
        if let Some(value) = self.email {
            model.email = Set(Some(value));
        }
        if let Some(value) = self.phone {
            model.phone = Set(Some(value));
        }
        if let Some(value) = self.date_of_birth {
            model.date_of_birth = Set(value);
        }
        if let Some(value) = self.address {
            model.address = Set(Some(value));
        }
        if let Some(value) = self.city {
            model.city = Set(Some(value));
        }
        if let Some(value) = self.state {
            model.state = Set(Some(value));
        }
        if let Some(value) = self.zip_code {
            model.zip_code = Set(Some(value));
        }
        if let Some(value) = self.emergency_contact_name {
            model.emergency_contact_name = Set(value);
        }
        if let Some(value) = self.emergency_contact_phone {
            model.emergency_contact_phone = Set(value);
        }
        if let Some(value) = self.emergency_contact_relation {
            model.emergency_contact_relation = Set(value);
        }
        if let Some(value) = self.campus {
            model.campus = Set(value.as_str().to_string());
        }
        if let Some(value) = self.class_number {
            model.class_number = Set(Some(value));
        }
        if let Some(value) = self.start_date {
            model.start_date = Set(Some(value));
        }
        if let Some(value) = self.graduation_date {
            model.graduation_date = Set(Some(value));
        }
        if let Some(value) = self.status {
            model.status = Set(value.as_str().to_string());
        }
        if let Some(value) = self.academic_progress {
            model.academic_progress = Set(Some(value));
        }
        if let Some(value) = self.fitness_progress {
            model.fitness_progress = Set(Some(value));
        }
        if let Some(value) = self.leadership_progress {
            model.leadership_progress = Set(Some(value));
        }
        if let Some(value) = self.service_hours {
            model.service_hours = Set(Some(value));
        }
        if let Some(value) = self.notes {
            model.notes = Set(Some(value));
        }

        model.updated_at = Set(now);
        model
    }
}

/// Cadet as returned by the API
#[derive(Object, Debug, Clone, PartialEq)]
pub struct CadetResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub emergency_contact_relation: String,
    pub campus: String,
    pub class_number: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub graduation_date: Option<NaiveDate>,
    pub status: String,
    pub academic_progress: Option<f64>,
    pub fitness_progress: Option<f64>,
    pub leadership_progress: Option<f64>,
    pub service_hours: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<cadet::Model> for CadetResponse {
    fn from(m: cadet::Model) -> Self {
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
            emergency_contact_name: m.emergency_contact_name,
            emergency_contact_phone: m.emergency_contact_phone,
            emergency_contact_relation: m.emergency_contact_relation,
            campus: m.campus,
            class_number: m.class_number,
            start_date: m.start_date,
            graduation_date: m.graduation_date,
            status: m.status,
            academic_progress: m.academic_progress,
            fitness_progress: m.fitness_progress,
            leadership_progress: m.leadership_progress,
            service_hours: m.service_hours,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum CreateCadetResponse {
    /// Cadet enrolled
    #[oai(status = 201)]
    Created(Json<CadetResponse>),
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct AxisScoreResponse {
    /// academic, fitness or leadership
    pub axis: String,
    pub label: String,
    pub value: f64,
    /// excellent, on_track, needs_attention or requires_focus
    pub band: String,
}

impl From<&AxisScore> for AxisScoreResponse {
    fn from(score: &AxisScore) -> Self {
        Self {
            axis: score.axis.as_str().to_string(),
            label: score.axis.label().to_string(),
            value: score.value,
            band: score.band.as_str().to_string(),
        }
    }
}

/// Progress summary of one cadet
#[derive(Object, Debug, Clone, PartialEq)]
pub struct CadetProgressResponse {
    pub cadet_id: i32,
    /// Mean of the three axes, one decimal place
    pub overall: f64,
    pub overall_band: String,
    pub axes: Vec<AxisScoreResponse>,
    pub service_hours: i32,
    pub weeks_in_program: i64,
    /// Percentage of the residential phase completed, one decimal place
    pub program_completion: f64,
    pub service_hours_complete: bool,
    pub core_components_complete: bool,
}

impl CadetProgressResponse {
    pub fn new(cadet_id: i32, summary: &CadetProgressSummary) -> Self {
        Self {
            cadet_id,
            overall: round_one_decimal(summary.overall),
            overall_band: crate::providers::progress_provider::band(summary.overall)
                .as_str()
                .to_string(),
            axes: summary.axes.iter().map(AxisScoreResponse::from).collect(),
            service_hours: summary.service_hours,
            weeks_in_program: summary.weeks_in_program,
            program_completion: round_one_decimal(summary.program_completion),
            service_hours_complete: summary.service_hours_complete,
            core_components_complete: summary.core_components_complete,
        }
    }
}
