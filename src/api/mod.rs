// API layer - HTTP endpoints
pub mod activities;
pub mod applications;
pub mod auth;
pub mod cadets;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod inventory;
pub mod mentorships;

pub use activities::ActivitiesApi;
pub use applications::ApplicationsApi;
pub use auth::BearerAuth;
pub use cadets::CadetsApi;
pub use dashboard::DashboardApi;
pub use events::EventsApi;
pub use health::HealthApi;
pub use inventory::InventoryApi;
pub use mentorships::MentorshipsApi;

use std::sync::Arc;

use poem::Route;
use poem_openapi::{OpenApiService, Tags};

use crate::app_data::AppData;

/// OpenAPI tags shared by every endpoint group
#[derive(Tags)]
pub enum ApiTags {
    /// Service health
    Health,
    /// Dashboard metrics, cohort progress and the activity feed
    Dashboard,
    /// Enrolled cadets
    Cadets,
    /// Intake applications
    Applications,
    /// Scheduled events and calendar views
    Events,
    /// Mentor assignments
    Mentorships,
    /// Equipment inventory
    Inventory,
}

/// Compose every endpoint group under `/api` with Swagger UI under `/swagger`
pub fn build_routes(app_data: Arc<AppData>) -> Route {
    let apis = (
        HealthApi::new(app_data.clone()),
        DashboardApi::new(app_data.clone()),
        ActivitiesApi::new(app_data.clone()),
        CadetsApi::new(app_data.clone()),
        ApplicationsApi::new(app_data.clone()),
        EventsApi::new(app_data.clone()),
        MentorshipsApi::new(app_data.clone()),
        InventoryApi::new(app_data),
    );

    let api_service = OpenApiService::new(apis, "Academy Admin API", "1.0.0").server("/api");
    let ui = api_service.swagger_ui();

    Route::new().nest("/api", api_service).nest("/swagger", ui)
}
