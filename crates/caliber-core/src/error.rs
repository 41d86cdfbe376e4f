/// Reasons a review submission is rejected before anything is persisted.
///
/// The `Display` text is the prompt shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please select a rating")]
    MissingRating,
}

/// Central error type for the Caliber review widget.
#[derive(Debug, thiserror::Error)]
pub enum CaliberError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("stored value under '{key}' is corrupt: {message}")]
    CorruptStore { key: String, message: String },

    #[error("incorrect admin password")]
    AuthFailed,

    #[error("invalid origin: {origin}")]
    InvalidOrigin { origin: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CaliberError {
    /// True for failures the user can recover from by re-entering input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CaliberError::Validation(_) | CaliberError::AuthFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_prompts() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            ValidationError::MissingRating.to_string(),
            "Please select a rating"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(CaliberError::from(ValidationError::MissingRating).is_recoverable());
        assert!(CaliberError::AuthFailed.is_recoverable());
        let corrupt = CaliberError::CorruptStore {
            key: "k".into(),
            message: "eof".into(),
        };
        assert!(!corrupt.is_recoverable());
    }
}
