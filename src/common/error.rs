use thiserror::Error;

/// Client-side faults in a write request. Always surfaced as 400.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid media type")]
    InvalidType,
    #[error("episodes[{index}] is missing required field '{field}'")]
    MissingEpisodeField { index: usize, field: &'static str },
    #[error("video_links[{index}] is missing required field 'video_link'")]
    MissingLinkField { index: usize },
    #[error("Expected array of episodes")]
    ExpectedArray,
    #[error("Expected at least one episode")]
    EmptyBatch,
    #[error("Can only add episodes to TV series")]
    WrongType,
    #[error("Invalid field value: {0}")]
    InvalidField(#[from] validator::ValidationErrors),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Media not found")]
    NotFound,
    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}
