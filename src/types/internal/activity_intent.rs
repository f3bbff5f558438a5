use crate::types::db::{application, cadet};

use super::status::ActivityType;

/// An activity feed entry waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityIntent {
    pub activity_type: ActivityType,
    pub title: String,
    pub description: Option<String>,
    pub related_id: Option<i32>,
    pub related_type: Option<String>,
    pub campus: Option<String>,
}

impl ActivityIntent {
    /// Entry for a newly enrolled cadet
    pub fn cadet_added(cadet: &cadet::Model) -> Self {
        Self {
            activity_type: ActivityType::CadetActivity,
            title: "New Cadet Added".to_string(),
            description: Some(format!(
                "Cadet {} {} has been added to the system",
                cadet.first_name, cadet.last_name
            )),
            related_id: Some(cadet.id),
            related_type: Some("cadet".to_string()),
            campus: Some(cadet.campus.clone()),
        }
    }

    /// Entry for an application received through public intake
    pub fn application_received(application: &application::Model) -> Self {
        Self {
            activity_type: ActivityType::SystemEvent,
            title: "New Application Received".to_string(),
            description: Some(format!(
                "Application received from {} {}",
                application.first_name, application.last_name
            )),
            related_id: Some(application.id),
            related_type: Some("application".to_string()),
            campus: Some(application.preferred_campus.clone()),
        }
    }
}
