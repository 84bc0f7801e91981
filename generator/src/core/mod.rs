//! Generator core logic

pub mod generator;
pub mod processor;
pub mod prompts;

pub use generator::ContentGenerator;
pub use processor::{ELLIPSIS, cap_words, postprocess, word_count};
pub use prompts::{PromptSet, PromptVariant};
