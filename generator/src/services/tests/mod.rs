//! Tests for generator services
//!
//! The completion client runs against a local wiremock server; the output
//! store runs against temporary folders.

pub mod completion_client;
