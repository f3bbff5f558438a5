use thiserror::Error;

/// A single failing field and why it failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Request rejected against its declared shape or invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", join_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects violations while a request is checked field by field
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field` unless `ok` holds
    pub fn check(&mut self, ok: bool, field: &str, reason: &str) -> &mut Self {
        if !ok {
            self.0.push(FieldViolation::new(field, reason));
        }
        self
    }

    /// Require a non-blank string
    pub fn not_blank(&mut self, value: &str, field: &str) -> &mut Self {
        self.check(!value.trim().is_empty(), field, "must not be empty")
    }

    /// Require an optional score to lie within 0-100
    pub fn percentage(&mut self, value: Option<f64>, field: &str) -> &mut Self {
        let ok = value.map_or(true, |v| (0.0..=100.0).contains(&v));
        self.check(ok, field, "must be between 0 and 100")
    }

    /// Require an optional count to be non-negative
    pub fn non_negative(&mut self, value: Option<i32>, field: &str) -> &mut Self {
        self.check(value.map_or(true, |v| v >= 0), field, "must not be negative")
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations: self.0 })
        }
    }
}
