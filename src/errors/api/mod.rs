// API-facing error types
use poem::http::StatusCode;
use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::internal::{FieldViolation, InternalError, NarrativeError, RecordError};

/// A field that failed validation
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    /// Name of the failing field
    pub field: String,

    /// Why the field was rejected
    pub reason: String,
}

/// Standardized error response body
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Failing fields, present on validation errors only
    #[oai(skip_serializing_if_is_empty)]
    pub fields: Vec<FieldErrorResponse>,
}

/// Error surface shared by every endpoint
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "bad_request_handler")]
pub enum ApiError {
    /// Request body or parameters failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Missing, malformed or expired staff token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Requested entity does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Route poem-openapi extraction failures into the structured error body
///
/// Security scheme failures arrive here with a 401 status and stay
/// authorization errors; everything else is a malformed request.
fn bad_request_handler(err: poem::Error) -> ApiError {
    if err.status() == StatusCode::UNAUTHORIZED {
        ApiError::unauthorized("Authentication required")
    } else {
        ApiError::validation(vec![FieldViolation::new("request", err.to_string())])
    }
}

impl ApiError {
    fn body(error: &str, message: String, status_code: u16) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            status_code,
            fields: Vec::new(),
        })
    }

    /// Create a ValidationFailed error naming every failing field
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let fields: Vec<FieldErrorResponse> = violations
            .into_iter()
            .map(|v| FieldErrorResponse {
                field: v.field,
                reason: v.reason,
            })
            .collect();
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        let mut body = Self::body(
            "validation_failed",
            format!("Invalid fields: {}", names.join(", ")),
            400,
        );
        body.0.fields = fields;
        ApiError::ValidationFailed(body)
    }

    /// Create an Unauthorized error
    pub fn unauthorized(message: &str) -> Self {
        ApiError::Unauthorized(Self::body("unauthorized", message.to_string(), 401))
    }

    /// Create a NotFound error
    pub fn not_found(entity: &str, id: &str) -> Self {
        ApiError::NotFound(Self::body(
            "not_found",
            format!("{} not found: {}", entity, id),
            404,
        ))
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ApiError::InternalError(Self::body(
            "internal_error",
            "An internal error occurred".to_string(),
            500,
        ))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Validation and not-found errors are surfaced verbatim; upstream failures
    /// are logged and masked.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::Validation(validation) => {
                tracing::warn!("Rejected request: {}", validation);
                Self::validation(validation.violations)
            }
            InternalError::Record(RecordError::NotFound { entity, id }) => {
                Self::not_found(entity, &id)
            }
            InternalError::Token(token_err) => {
                tracing::warn!("Rejected staff token: {}", token_err);
                Self::unauthorized("Invalid or expired token")
            }
            InternalError::Narrative(NarrativeError::NotConfigured) => {
                tracing::error!("Narrative request made without NARRATIVE_API_KEY configured");
                Self::internal_server_error()
            }
            other => {
                tracing::error!("Upstream failure: {}", other);
                Self::internal_server_error()
            }
        }
    }

    fn response(&self) -> &ErrorResponse {
        match self {
            ApiError::ValidationFailed(json)
            | ApiError::Unauthorized(json)
            | ApiError::NotFound(json)
            | ApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.response().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.response().status_code
    }

    /// Failing fields of a validation error
    pub fn fields(&self) -> &[FieldErrorResponse] {
        &self.response().fields
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
