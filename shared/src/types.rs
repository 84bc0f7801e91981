//! Core shared types and identifiers

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any binary in the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// One-shot generator CLI
    Generator,
    /// Dashboard web server
    WebServer,
}

impl ProcessId {
    /// Initialize the global process ID for the generator CLI
    pub fn init_generator() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Generator)
    }

    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Get the global process ID, falling back to the generator when
    /// nothing was initialized (library use, tests)
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get().unwrap_or(&ProcessId::Generator)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Generator => write!(f, "generator"),
            ProcessId::WebServer => write!(f, "webserver"),
        }
    }
}

/// Reasons a completion request produced no content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    /// Authentication failed (invalid API key)
    AuthenticationFailed,
    /// Rate limit exceeded
    RateLimitExceeded,
    /// Service temporarily unavailable
    ServiceUnavailable,
    /// Any other non-200 status from the provider
    ServerError(String),
    /// Request timeout
    Timeout,
    /// Network/connection error
    NetworkError(String),
    /// Body could not be parsed or had no completion text
    InvalidResponse(String),
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::AuthenticationFailed => write!(f, "authentication failed"),
            ApiFailure::RateLimitExceeded => write!(f, "rate limit exceeded"),
            ApiFailure::ServiceUnavailable => write!(f, "service unavailable"),
            ApiFailure::ServerError(status) => write!(f, "server error: {status}"),
            ApiFailure::Timeout => write!(f, "request timed out"),
            ApiFailure::NetworkError(msg) => write!(f, "network error: {msg}"),
            ApiFailure::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

/// One generated post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// 1-based position in the batch
    pub number: usize,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Only serialized when the canned fallback text was used
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub backup: bool,
}

impl Post {
    pub fn generated(number: usize, content: String) -> Self {
        Self {
            number,
            content,
            timestamp: Local::now(),
            backup: false,
        }
    }

    pub fn from_backup(number: usize, content: String) -> Self {
        Self {
            number,
            content,
            timestamp: Local::now(),
            backup: true,
        }
    }
}

/// One full generator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostBatch {
    pub generated_at: DateTime<Local>,
    pub posts: Vec<Post>,
}

impl PostBatch {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            generated_at: Local::now(),
            posts,
        }
    }

    /// Number of posts that fell back to canned content
    pub fn backup_count(&self) -> usize {
        self.posts.iter().filter(|p| p.backup).count()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
