use uuid::Uuid;

use super::auth::Claims;
use super::campus::{resolve_scope, Campus};

/// Source of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    /// Authenticated staff request through the HTTP API
    API,

    /// Unauthenticated public intake request
    Public,

    /// Request originated from a CLI command
    CLI,
}

/// Request context that flows from the API layer into coordinators
///
/// Carries the actor identity used for `reviewed_by`, `created_by` and
/// `performed_by` stamps and the home campus used as the default scope.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub request_id: Uuid,

    /// Whether a staff token was validated for this request
    pub authenticated: bool,

    /// Full token claims if authenticated
    pub claims: Option<Claims>,

    /// Source of the request
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,

    /// Home campus of the actor, if the token carried a recognised one
    pub home_campus: Option<Campus>,
}

impl RequestContext {
    /// Create a context for a validated staff token
    pub fn for_staff(claims: Claims) -> Self {
        let home_campus = claims
            .campus
            .as_deref()
            .and_then(|campus| campus.parse::<Campus>().ok());

        Self {
            request_id: Uuid::new_v4(),
            authenticated: true,
            actor_id: claims.sub.clone(),
            claims: Some(claims),
            source: RequestSource::API,
            home_campus,
        }
    }

    /// Create a context for the unauthenticated application intake
    pub fn for_public() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            authenticated: false,
            claims: None,
            source: RequestSource::Public,
            actor_id: "public".to_string(),
            home_campus: None,
        }
    }

    /// Campus filter for a list query issued under this context
    pub fn scope(&self, requested: Option<Campus>) -> Option<Campus> {
        resolve_scope(requested, self.home_campus)
    }

    /// Create a context for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            authenticated: false,
            claims: None,
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
            home_campus: None,
        }
    }
}
