use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid stored state: {0}")]
    InvalidState(String),

    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("mood must not be blank")]
    InvalidMood,

    #[error("invalid activity: {0}")]
    InvalidActivity(String),

    #[error("water goal must be at least 1, got {0}")]
    InvalidGoal(u32),

    #[error("statistic requires at least one value")]
    EmptyWindow,
}

impl TrackerError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn invalid_activity(message: impl Into<String>) -> Self {
        Self::InvalidActivity(message.into())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
