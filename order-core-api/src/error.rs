use std::collections::BTreeMap;

use thiserror::Error;

/// Field-keyed validation messages, each field mapping to one or more messages.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A reference the caller was expected to pre-validate no longer resolves.
    #[error("Referential inconsistency: {0}")]
    ReferentialInconsistency(String),

    /// Persisted data violates a mandatory-field rule.
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),

    #[error("Validation error: {0:?}")]
    Validation(ValidationErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl OrderError {
    /// True for failures the caller cannot fix by changing its request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            OrderError::ReferentialInconsistency(_)
                | OrderError::MalformedPersistedState(_)
                | OrderError::Database(_)
                | OrderError::Configuration(_)
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_classification() {
        assert!(!OrderError::NotFound("order".into()).is_internal());
        assert!(!OrderError::Validation(ValidationErrors::new()).is_internal());
        assert!(OrderError::ReferentialInconsistency("product".into()).is_internal());
        assert!(OrderError::MalformedPersistedState("quantity".into()).is_internal());
        assert!(OrderError::Database("closed".into()).is_internal());
        assert!(OrderError::Configuration("DATABASE_URL".into()).is_internal());
    }
}
