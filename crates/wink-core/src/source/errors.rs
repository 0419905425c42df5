use crate::errors::WinkError;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(
        "Accessibility permission not granted (System Settings > Privacy & Security > Accessibility)"
    )]
    PermissionDenied,

    #[error("Window listing failed: {message}")]
    ListFailed { message: String },

    #[error("Accessibility query failed for pid {pid}: {message}")]
    AxQueryFailed { pid: i32, message: String },

    #[error("Accessibility query timed out for pid {pid}")]
    AxTimeout { pid: i32 },

    #[error("No running process with pid {pid}")]
    ProcessNotFound { pid: i32 },

    #[error("Failed to activate process {pid}: {message}")]
    ActivationFailed { pid: i32, message: String },

    #[error("Failed to focus window: {message}")]
    FocusFailed { message: String },

    #[error("Window discovery is only supported on macOS")]
    Unsupported,
}

impl WinkError for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            SourceError::PermissionDenied => "PERMISSION_DENIED",
            SourceError::ListFailed { .. } => "LIST_FAILED",
            SourceError::AxQueryFailed { .. } => "AX_QUERY_FAILED",
            SourceError::AxTimeout { .. } => "AX_TIMEOUT",
            SourceError::ProcessNotFound { .. } => "PROCESS_NOT_FOUND",
            SourceError::ActivationFailed { .. } => "ACTIVATION_FAILED",
            SourceError::FocusFailed { .. } => "FOCUS_FAILED",
            SourceError::Unsupported => "UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SourceError::PermissionDenied | SourceError::Unsupported
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_display() {
        let error = SourceError::PermissionDenied;
        assert!(error.to_string().contains("Accessibility permission"));
        assert_eq!(error.error_code(), "PERMISSION_DENIED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_ax_timeout_display() {
        let error = SourceError::AxTimeout { pid: 501 };
        assert_eq!(
            error.to_string(),
            "Accessibility query timed out for pid 501"
        );
        assert_eq!(error.error_code(), "AX_TIMEOUT");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_activation_failed_display() {
        let error = SourceError::ActivationFailed {
            pid: 42,
            message: "process refused activation".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to activate process 42: process refused activation"
        );
        assert_eq!(error.error_code(), "ACTIVATION_FAILED");
    }

    #[test]
    fn test_unsupported_is_user_error() {
        let error = SourceError::Unsupported;
        assert_eq!(error.error_code(), "UNSUPPORTED");
        assert!(error.is_user_error());
    }
}
