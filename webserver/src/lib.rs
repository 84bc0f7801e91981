//! Web dashboard for the post generator
//!
//! Serves a single-page dashboard and a small JSON API for generating
//! batches on demand and browsing previously written batches.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;
