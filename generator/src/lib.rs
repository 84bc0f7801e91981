//! Post generator library
//!
//! Sends a fixed list of prompts to a chat-completion API, cleans and caps
//! each reply, and substitutes canned backup posts for failed calls. Batches
//! can be rendered to text and PDF files in an output folder.

pub mod error;
pub mod types;
pub mod traits;
pub mod core;
pub mod services;

// Re-export main types
pub use error::{GeneratorError, GeneratorResult};
pub use types::*;
pub use traits::*;
pub use crate::core::{ContentGenerator, PromptSet, PromptVariant};
pub use services::{RealBatchStore, RealCompletionClient};
