use thiserror::Error;

pub mod database;
pub mod narrative;
pub mod record;
pub mod token;
pub mod validation;

pub use database::DatabaseError;
pub use narrative::NarrativeError;
pub use record::RecordError;
pub use token::TokenError;
pub use validation::{FieldViolation, ValidationError, Violations};

/// Internal error type for store, provider and coordinator operations
///
/// Infrastructure errors (database, parse) are shared; domain errors are
/// grouped by concern. Not exposed via API - endpoints convert through
/// `ApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse { value_type: String, message: String },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Narrative(#[from] NarrativeError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        RecordError::not_found(entity, id).into()
    }

    /// Single-field validation failure
    pub fn invalid_field(field: &str, reason: &str) -> Self {
        ValidationError {
            violations: vec![FieldViolation::new(field, reason)],
        }
        .into()
    }
}
