use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("failed to parse source payload: {0}")]
    Parse(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ScraperError {
    fn from(err: reqwest::Error) -> Self {
        ScraperError::SourceUnavailable(err.to_string())
    }
}

impl From<csv::Error> for ScraperError {
    fn from(err: csv::Error) -> Self {
        ScraperError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
