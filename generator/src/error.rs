//! Generator error types

use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator error types
///
/// Per-prompt completion failures never surface here; they are absorbed by
/// backup substitution inside the batch.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("DEEPSEEK_API_KEY is not set. Add it to .env or the environment")]
    MissingApiKey,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid file name: {name}")]
    InvalidFileName { name: String },

    #[error("File not found: {name}")]
    FileNotFound { name: String },

    #[error("PDF rendering failed: {message}")]
    PdfError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(GeneratorError::MissingApiKey.to_string().starts_with("DEEPSEEK_API_KEY is not set"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert!(matches!(GeneratorError::from(io), GeneratorError::IoError(_)));
    }
}
