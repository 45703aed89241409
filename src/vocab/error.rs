use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    #[error("Invalid quality rating {0}: expected an integer from 0 to 5")]
    InvalidQuality(i32),

    #[error("Unknown review button: {0:?}")]
    UnknownButton(String),

    /// The scheduler never resolves ids itself; this is raised by the session layer.
    #[error("Vocabulary item not found: {0}")]
    NotFound(Uuid),

    #[error("Review date out of range")]
    DateOutOfRange,
}

impl SchedulerError {
    /// Caller passed a value outside the accepted input domain
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidQuality(_) | Self::UnknownButton(_))
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
