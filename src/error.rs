use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlazeJumpError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty Layout: '{definition}' has no usable characters")]
    EmptyLayout { definition: String },

    #[error("Unknown Heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type BjResult<T> = Result<T, BlazeJumpError>;
