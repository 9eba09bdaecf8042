use std::path::PathBuf;

pub type GreetingResult<T> = Result<T, GreetingError>;

#[derive(thiserror::Error, Debug)]
pub enum GreetingError {
    #[error("config error: {0}")]
    Config(String),

    #[error("asset error: {path:?}: {message}")]
    Asset { path: PathBuf, message: String },

    #[error("audio error: {0}")]
    Audio(String),

    #[error("record error: {0}")]
    Record(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GreetingError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn asset(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Asset {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    pub fn record(msg: impl Into<String>) -> Self {
        Self::Record(msg.into())
    }
}
