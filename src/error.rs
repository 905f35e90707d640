#[derive(Debug, thiserror::Error)]
pub enum RpcStatusError {
    #[error("Invalid RPC url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON-RPC error from {0}")]
    JsonRpc(String),

    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Registry error: {0}")]
    Registry(String),
}

pub type Result<T> = std::result::Result<T, RpcStatusError>;
