use thiserror::Error;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    /// The requested personal session would run past closing time.
    #[error("Invalid time window: {0}")]
    InvalidTimeWindow(String),

    /// The requested slot breaks the buffer around another commitment of the trainer.
    #[error("Scheduling conflict: {0}")]
    SchedulingConflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl GymError {
    /// True for failures caused by the caller's request rather than by the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, GymError::Database(_) | GymError::Internal(_))
    }
}

pub type GymResult<T> = Result<T, GymError>;
