use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Allow-list is not strictly ascending or otherwise malformed.
    #[error("charset error: {0}")]
    Charset(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
