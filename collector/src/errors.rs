use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("OpenWeather rejected the API key (HTTP 401)")]
    Unauthorized,

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("OpenWeather request failed with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Missing field in OpenWeather response: {0}")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type Result<T> = std::result::Result<T, Error>;
