use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Riot ID format. Use format: Name#TAG")]
    InvalidRiotId,

    #[error("API key rejected (403). Check that RIOT_API_KEY is valid and not expired")]
    ApiKeyRejected,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No ranked games found for this player")]
    NoRankedGames,

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Resource not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
