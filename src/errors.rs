use thiserror::Error;

/// Top-level error type returned by AnimeMoments repositories.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Validation failed for one or more fields.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// Target entity was not found when performing a mutation.
    #[error("entity not found")]
    NotFound { entity_id: Option<String> },

    /// Reading or writing a durable storage key failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Encoding the store or session for a flush failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Collection of validation issues encountered while preparing a mutation.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, code, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Detailed validation failure for a single field.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result alias for checks that produce no value on success.
pub type ValidationResult<T> = Result<T, ValidationError>;
