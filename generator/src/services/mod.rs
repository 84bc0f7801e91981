//! Generator service implementations

pub mod completion_client;
pub mod output_store;
pub mod pdf;

#[cfg(test)]
pub mod tests;

pub use completion_client::*;
pub use output_store::*;
