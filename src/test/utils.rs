// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use poem_openapi::auth::Bearer;
use sea_orm::{Database, DatabaseConnection};

use crate::api::BearerAuth;
use crate::app_data::AppData;
use crate::config::{MockEnvironment, NarrativeSettings, SecretManager};
use crate::errors::internal::NarrativeError;
use crate::errors::InternalError;
use crate::providers::{ChatCompletionsClient, NarrativeGenerator};
use crate::types::db::{application, cadet};
use crate::types::dto::application::CreateApplicationRequest;
use crate::types::dto::cadet::CreateCadetRequest;
use crate::types::dto::event::CreateEventRequest;
use crate::types::internal::{CadetStatus, Campus};

pub const TEST_JWT_SECRET: &str = "academy-test-secret-that-is-long-enough";

/// Creates an in-memory database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Secret manager loaded from a mock environment holding the test JWT secret
pub fn test_secret_manager() -> Arc<SecretManager> {
    let env = MockEnvironment::empty().with_var("JWT_SECRET", TEST_JWT_SECRET);
    Arc::new(SecretManager::from_env_provider(&env).expect("Failed to load test secrets"))
}

/// Full AppData over a fresh database with no narrative API key
pub async fn setup_test_app_data() -> Arc<AppData> {
    let client = ChatCompletionsClient::new(NarrativeSettings::default(), None)
        .expect("Failed to build narrative client");
    setup_test_app_data_with(Arc::new(client)).await
}

/// Full AppData over a fresh database with the given narrative generator
pub async fn setup_test_app_data_with(generator: Arc<dyn NarrativeGenerator>) -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::with_generator(db, test_secret_manager(), generator))
}

/// Bearer credentials for a staff member with the given home campus
pub fn staff_auth(app_data: &AppData, campus: Option<Campus>) -> BearerAuth {
    let token = app_data
        .token_provider
        .issue("staff-1", Some("Test Staff".to_string()), campus, 15)
        .expect("Failed to issue test token");
    BearerAuth(Bearer { token })
}

/// Generator that replays a fixed reply and records every prompt it receives
pub struct ScriptedGenerator {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl NarrativeGenerator for ScriptedGenerator {
    fn is_configured(&self) -> bool {
        true
    }

    async fn complete(&self, prompt: &str) -> Result<Option<String>, InternalError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Some(reply) => Ok(Some(reply.clone())),
            None => Err(NarrativeError::NotConfigured.into()),
        }
    }
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Persisted-looking cadet record for prompt and progress tests
pub fn sample_cadet() -> cadet::Model {
    let now = at(2025, 3, 1, 9, 0);
    cadet::Model {
        id: 1,
        first_name: "Malia".to_string(),
        last_name: "Kealoha".to_string(),
        email: None,
        phone: None,
        date_of_birth: NaiveDate::from_ymd_opt(2008, 5, 14).unwrap(),
        address: None,
        city: Some("Kapolei".to_string()),
        state: Some("HI".to_string()),
        zip_code: None,
        emergency_contact_name: "Leilani Kealoha".to_string(),
        emergency_contact_phone: "808-555-0101".to_string(),
        emergency_contact_relation: "Mother".to_string(),
        campus: "oahu".to_string(),
        class_number: Some(64),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 13),
        graduation_date: None,
        status: "active".to_string(),
        academic_progress: Some(72.0),
        fitness_progress: Some(85.0),
        leadership_progress: Some(64.0),
        service_hours: Some(18),
        notes: Some("Strong in group drills".to_string()),
        created_at: now,
        updated_at: now,
    }
}

/// Persisted-looking pending application for prompt tests
pub fn sample_application() -> application::Model {
    let now = at(2025, 2, 10, 14, 30);
    application::Model {
        id: 1,
        first_name: "Keoni".to_string(),
        last_name: "Kahale".to_string(),
        email: "keoni@example.com".to_string(),
        phone: "808-555-0199".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2008, 9, 2).unwrap(),
        address: "12 Ala Moana Blvd".to_string(),
        city: "Honolulu".to_string(),
        state: "HI".to_string(),
        zip_code: "96813".to_string(),
        parent_guardian_name: "Kalani Kahale".to_string(),
        parent_guardian_phone: "808-555-0198".to_string(),
        parent_guardian_email: None,
        current_school: Some("Farrington High".to_string()),
        grade_level: Some("10".to_string()),
        reason_for_applying: Some("Wants structure and a fresh start".to_string()),
        previous_challenges: Some("Attendance".to_string()),
        goals: Some("Earn a diploma and join the Coast Guard".to_string()),
        preferred_campus: "oahu".to_string(),
        status: "pending".to_string(),
        reviewed_by: None,
        review_notes: None,
        submitted_at: now,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// Minimal valid enrollment request
pub fn cadet_request(first_name: &str, campus: Campus, status: CadetStatus) -> CreateCadetRequest {
    CreateCadetRequest {
        first_name: first_name.to_string(),
        last_name: "Test".to_string(),
        email: None,
        phone: None,
        date_of_birth: NaiveDate::from_ymd_opt(2008, 1, 1).unwrap(),
        address: None,
        city: None,
        state: None,
        zip_code: None,
        emergency_contact_name: "Guardian".to_string(),
        emergency_contact_phone: "808-555-0100".to_string(),
        emergency_contact_relation: "Parent".to_string(),
        campus: Some(campus),
        class_number: None,
        start_date: None,
        graduation_date: None,
        status: Some(status),
        academic_progress: None,
        fitness_progress: None,
        leadership_progress: None,
        service_hours: None,
        notes: None,
    }
}

/// Minimal valid intake form
pub fn application_request(first_name: &str, campus: Campus) -> CreateApplicationRequest {
    CreateApplicationRequest {
        first_name: first_name.to_string(),
        last_name: "Applicant".to_string(),
        email: "applicant@example.com".to_string(),
        phone: "808-555-0111".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2008, 6, 1).unwrap(),
        address: "1 Main St".to_string(),
        city: "Hilo".to_string(),
        state: "HI".to_string(),
        zip_code: "96720".to_string(),
        parent_guardian_name: "Parent".to_string(),
        parent_guardian_phone: "808-555-0112".to_string(),
        parent_guardian_email: None,
        current_school: None,
        grade_level: None,
        reason_for_applying: None,
        previous_challenges: None,
        goals: None,
        preferred_campus: Some(campus),
    }
}

/// Event request at a location on a campus
pub fn event_request(
    title: &str,
    location: Option<&str>,
    campus: Campus,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        description: None,
        event_type: "training".to_string(),
        start_time,
        end_time,
        location: location.map(str::to_string),
        campus: Some(campus),
        max_participants: None,
        is_required: None,
    }
}
