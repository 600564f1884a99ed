use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    #[error("Missing value for '{field}' on country '{country}'")]
    MissingField { field: &'static str, country: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;
