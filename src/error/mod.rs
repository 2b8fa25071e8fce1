//! Error types for skill-sweep.

use thiserror::Error;

/// Primary error type for all skill-sweep operations.
///
/// Failures that the sweep recovers from locally (a single directory that
/// could not be removed, an unreadable agent directory) are not surfaced
/// through this type; they are reported per item instead.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl SweepError {
    /// Whether the underlying cause is a denied filesystem permission.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, SweepError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn permission_denied_is_detected_only_for_io_errors() {
        let denied = SweepError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "nope",
        ));
        assert!(denied.is_permission_denied());
        assert!(!SweepError::Prompt("closed".into()).is_permission_denied());
    }
}
