//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// The two classes of failure a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The named activity does not exist.
    NotFound,
    /// The request was understood but refused by a validation check.
    InvalidArgument,
}

/// Errors returned by the sign-up and unregister operations.
///
/// The display strings are part of the public contract: they are sent to
/// clients verbatim as the `detail` of an error response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound(String),
    #[error("Invalid email format")]
    InvalidEmail(String),
    #[error("Student already signed up")]
    AlreadySignedUp,
    #[error("Maximum participants reached")]
    ActivityFull,
    #[error("Student not registered for this activity")]
    NotRegistered,
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::NotFound(_) => ErrorKind::NotFound,
            ActivityError::InvalidEmail(_)
            | ActivityError::AlreadySignedUp
            | ActivityError::ActivityFull
            | ActivityError::NotRegistered => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind() {
        let err = ActivityError::NotFound("Underwater Basket Weaving".to_string());
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn test_invalid_argument_kinds() {
        let errors = [
            ActivityError::InvalidEmail("nope".to_string()),
            ActivityError::AlreadySignedUp,
            ActivityError::ActivityFull,
            ActivityError::NotRegistered,
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_detail_messages() {
        assert_eq!(
            ActivityError::InvalidEmail("x".to_string()).to_string(),
            "Invalid email format"
        );
        assert_eq!(
            ActivityError::AlreadySignedUp.to_string(),
            "Student already signed up"
        );
        assert_eq!(
            ActivityError::ActivityFull.to_string(),
            "Maximum participants reached"
        );
        assert_eq!(
            ActivityError::NotRegistered.to_string(),
            "Student not registered for this activity"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::Invalid {
            key: "MERGINGTON_PORT".to_string(),
            value: "eighty".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"eighty\" for MERGINGTON_PORT: invalid digit found in string"
        );
    }
}
