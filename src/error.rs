use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(interview_hours::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(interview_hours::config),
        help("check config/office_hours.toml and the OFFICE_HOURS_* variables")
    )]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(interview_hours::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(interview_hours::serialization))]
    Serialization(String),

    #[error("Server error: {0}")]
    #[diagnostic(code(interview_hours::server))]
    Server(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(interview_hours::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(message: &str) -> Error {
    Error::Environment(message.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create server errors
pub fn server_error(message: &str) -> Error {
    Error::Server(message.to_string())
}
