use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Invalid observation: {0}")]
    InvalidObservation(String),
    #[error("Unknown hotel: {0}")]
    UnknownHotel(String),
    #[error("Unknown group: {0}")]
    UnknownGroup(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
