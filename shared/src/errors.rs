//! Shared error types for the post generator workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
