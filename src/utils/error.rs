use thiserror::Error;

/// 統一錯誤類型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Upstream API returned status {status}: {body}")]
    UpstreamStatusError { status: u16, body: String },

    #[error("Unexpected upstream response: {message}")]
    UpstreamShapeError { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
