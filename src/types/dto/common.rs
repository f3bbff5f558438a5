use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,

    /// "connected" or "unreachable"
    pub database: String,

    /// Whether the narrative service has credentials
    pub narrative_configured: bool,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
