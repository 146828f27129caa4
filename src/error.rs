use crate::services::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MvpError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("selector error: {0}")]
    Selector(String),
    /// The leaderboard itself could not be scraped. Fatal to the whole run;
    /// every error below is recovered by dropping one candidate or record.
    #[error("leaderboard discovery failed: {0}")]
    Discovery(String),
    #[error("fetch failed for {candidate}: {reason}")]
    Fetch { candidate: String, reason: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("persistence error: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, MvpError>;
