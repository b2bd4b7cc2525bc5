use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search for query '{query}' failed with status: {status}")]
    Upstream { status: StatusCode, query: String },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
