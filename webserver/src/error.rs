//! WebServer-specific error types

use axum::http::StatusCode;
use thiserror::Error;

use generator::GeneratorError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {addr}: {message}")]
    ServerStartupFailed { addr: String, message: String },

    #[error("API key not configured")]
    NotConfigured,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status a handler should answer with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Generator(GeneratorError::FileNotFound { .. }) => StatusCode::NOT_FOUND,
            WebServerError::Generator(GeneratorError::InvalidFileName { .. }) => StatusCode::BAD_REQUEST,
            WebServerError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
