use thiserror::Error;

/// Unified error type for cut-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Command `{command}` failed with exit code {}", exit_code(.code))]
    Command { command: String, code: Option<i32> },

    #[error("Action cancelled by user")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

/// Convenience type alias for Results in cut-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a precondition error with context
    pub fn precondition(msg: impl Into<String>) -> Self {
        ReleaseError::Precondition(msg.into())
    }

    /// Create a command error from the rendered command line and its exit code
    pub fn command(command: impl Into<String>, code: Option<i32>) -> Self {
        ReleaseError::Command {
            command: command.into(),
            code,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ReleaseError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_command_error_display() {
        let err = ReleaseError::command("git push origin release/13.0", Some(128));
        assert_eq!(
            err.to_string(),
            "Command `git push origin release/13.0` failed with exit code 128"
        );

        let killed = ReleaseError::command("gh auth status", None);
        assert!(killed.to_string().ends_with("exit code unknown"));
    }

    #[test]
    fn test_cancelled() {
        assert!(ReleaseError::Cancelled.is_cancelled());
        assert!(!ReleaseError::version("x").is_cancelled());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version error"),
            (ReleaseError::precondition("x"), "Precondition failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
