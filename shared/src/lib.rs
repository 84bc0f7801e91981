//! Shared types for the post generator workspace
//!
//! Holds the post records passed between the generator and the dashboard,
//! the process identity used for log tagging, and the tracing setup.

pub mod types;
pub mod errors;
pub mod logging;
pub mod env;

pub use types::*;
pub use errors::*;
