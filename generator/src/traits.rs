//! Generator trait definitions for dependency injection

use async_trait::async_trait;

use shared::{ApiFailure, PostBatch};
use crate::error::GeneratorResult;
use crate::types::{BatchFile, WrittenBatch};

/// Chat-completion seam: one prompt in, completion text or a failure out
#[mockall::automock]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one system + user message pair and return the raw completion text
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ApiFailure>;
}

/// Flat-file storage for rendered batches
#[mockall::automock]
#[async_trait]
pub trait BatchStore: Send + Sync {
    /// Write the text and PDF renderings of a batch
    async fn write_batch(&self, batch: &PostBatch) -> GeneratorResult<WrittenBatch>;

    /// List previously written batches, newest first
    async fn list_batches(&self) -> GeneratorResult<Vec<BatchFile>>;

    /// Parse the posts back out of a text rendering
    async fn read_posts(&self, file_name: &str) -> GeneratorResult<Vec<String>>;

    /// Raw bytes of a stored document for download
    async fn read_document(&self, file_name: &str) -> GeneratorResult<Vec<u8>>;
}
