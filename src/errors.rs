#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid port: {0} (expected 1..=65535)")]
    InvalidPort(u32),

    #[error("Invalid status code: {0}")]
    InvalidStatusCode(u16),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
