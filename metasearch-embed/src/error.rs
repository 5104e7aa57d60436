use thiserror::Error;

/// Errors from loading a panel's embedded content.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("not an http(s) URL: {0}")]
    InvalidUrl(String),

    #[error("load cancelled")]
    Cancelled,

    #[error(transparent)]
    Http(#[from] ureq::Error),

    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),
}
