use thiserror::Error;

#[derive(Error, Debug)]
pub enum FairwayError {
    #[error("invalid slope rating: {0}")]
    InvalidSlopeRating(i32),

    #[error("invalid round data: {0}")]
    InvalidRound(String),

    #[error("invalid training plan: {0}")]
    InvalidPlan(String),

    #[error("rounds file not found: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("rounds file parse error: {0}")]
    RoundsParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FairwayError>;
