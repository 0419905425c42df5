use crate::errors::WinkError;
use crate::source::SourceError;
use thiserror::Error;

/// Errors from window reconciliation, search, and activation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Accessibility permission not granted (System Settings > Privacy & Security > Accessibility)"
    )]
    PermissionDenied,

    #[error("Window discovery failed: {message}")]
    SourceFailed { message: String },

    #[error("Failed to activate '{title}': {message}")]
    ActivationFailed { title: String, message: String },

    #[error("No window matches '{query}'")]
    NoMatch { query: String },
}

impl WinkError for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            EngineError::PermissionDenied => "PERMISSION_DENIED",
            EngineError::SourceFailed { .. } => "SOURCE_FAILED",
            EngineError::ActivationFailed { .. } => "ACTIVATION_FAILED",
            EngineError::NoMatch { .. } => "NO_MATCH",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            EngineError::PermissionDenied | EngineError::NoMatch { .. }
        )
    }
}

impl From<SourceError> for EngineError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::PermissionDenied => EngineError::PermissionDenied,
            other => EngineError::SourceFailed {
                message: other.to_string(),
            },
        }
    }
}
