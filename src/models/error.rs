use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpScoreError {
    #[error("{platform} API error: {message}")]
    ApiError { platform: String, message: String },

    #[error("User not found on {platform}: {handle}")]
    UserNotFound { platform: String, handle: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Platform not supported: {0}")]
    PlatformNotSupported(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CpScoreError {
    pub fn api(platform: super::Platform, message: impl Into<String>) -> Self {
        CpScoreError::ApiError {
            platform: platform.as_str().to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(platform: super::Platform, handle: impl Into<String>) -> Self {
        CpScoreError::UserNotFound {
            platform: platform.as_str().to_string(),
            handle: handle.into(),
        }
    }

    /// True when the platform answered but the account does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CpScoreError::UserNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CpScoreError>;
