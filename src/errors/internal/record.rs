use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    /// Requested id has no matching row
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl RecordError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
