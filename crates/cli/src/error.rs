use portfolio_tracker_core::errors::CoreError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("changes were not saved: {0}")]
    Unsaved(CoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 2,
            Self::Core(CoreError::ValidationError(_)) => 2,
            Self::Unsaved(_) => 3,
            Self::Serialization(_) => 4,
            Self::Core(_) => 1,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Input("x".into()).exit_code(), 2);
        assert_eq!(
            CliError::Core(CoreError::ValidationError("bad".into())).exit_code(),
            2
        );
        assert_eq!(CliError::Unsaved(CoreError::FileIO("disk full".into())).exit_code(), 3);
        assert_eq!(CliError::Core(CoreError::NoProvider).exit_code(), 1);
    }

    #[test]
    fn unsaved_message_includes_cause() {
        let err = CliError::Unsaved(CoreError::FileIO("disk full".into()));
        assert_eq!(
            err.to_string(),
            "changes were not saved: File I/O error: disk full"
        );
    }
}
