use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(fieldbook::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(fieldbook::config))]
    Config(String),

    #[error("Availability API error: {0}")]
    #[diagnostic(code(fieldbook::availability_api))]
    AvailabilityApi(String),

    #[error(transparent)]
    #[diagnostic(code(fieldbook::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(fieldbook::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(fieldbook::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::AvailabilityApi(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create availability API errors
pub fn api_error(message: &str) -> Error {
    Error::AvailabilityApi(message.to_string())
}
