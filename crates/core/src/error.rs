use thiserror::Error;

/// Validation failures for learner input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("learner name cannot be empty")]
    EmptyIdentifier,

    #[error("study hours must be between 0 and 12, got {0}")]
    StudyHoursOutOfRange(u8),

    #[error("daily progress scores must be between 1 and 100, got {0}")]
    ProgressScoreOutOfRange(u8),
}
