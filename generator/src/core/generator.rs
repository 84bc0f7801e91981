//! Batch generation with per-prompt backup substitution

use std::time::Duration;

use shared::{Post, PostBatch, ProcessId, logging, process_info, process_warn};

use crate::core::processor::{cap_words, postprocess};
use crate::core::prompts::{PromptSet, PromptVariant};
use crate::traits::CompletionClient;
use crate::types::{DEFAULT_MAX_WORDS, DEFAULT_PAUSE};

/// Runs the fixed prompt list against a completion client.
///
/// Calls are strictly sequential. A failed call is replaced by the prompt
/// set's backup text, so a batch always holds exactly one post per prompt.
pub struct ContentGenerator<C> {
    client: C,
    prompts: PromptSet,
    max_words: usize,
    pause: Duration,
}

impl<C> ContentGenerator<C>
where
    C: CompletionClient,
{
    pub fn new(client: C, prompts: PromptSet) -> Self {
        Self {
            client,
            prompts,
            max_words: DEFAULT_MAX_WORDS,
            pause: DEFAULT_PAUSE,
        }
    }

    pub fn for_variant(client: C, variant: PromptVariant) -> Self {
        Self::new(client, PromptSet::for_variant(variant))
    }

    /// Delay inserted between consecutive calls
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    /// Ask the model for one post. `None` means the call produced nothing
    /// usable and the caller should fall back.
    pub async fn generate(&self, prompt: &str) -> Option<String> {
        let user_message = self.prompts.user_message(prompt);
        match self.client.complete(self.prompts.system_prompt, &user_message).await {
            Ok(raw) => {
                let content = postprocess(&raw);
                if content.is_empty() {
                    process_warn!(ProcessId::current(), "Completion was empty after clean-up");
                    None
                } else {
                    Some(content)
                }
            }
            Err(failure) => {
                process_warn!(ProcessId::current(), failure = %failure, "Completion call failed");
                None
            }
        }
    }

    /// Generate one post per prompt, in prompt order
    pub async fn generate_batch(&self) -> Vec<Post> {
        let total = self.prompts.len();
        let mut posts = Vec::with_capacity(total);

        process_info!(ProcessId::current(), "Generating {} posts", total);

        for (index, prompt) in self.prompts.prompts.iter().enumerate() {
            let number = index + 1;
            logging::log_progress(ProcessId::current(), "Generating", &format!("post {number}/{total}"));

            let post = match self.generate(prompt).await {
                Some(content) => {
                    let content = cap_words(&content, self.max_words);
                    process_info!(ProcessId::current(), "[OK] post {}: {}", number, preview(&content));
                    Post::generated(number, content)
                }
                None => {
                    let backup = self.prompts.backup_for(number);
                    process_warn!(ProcessId::current(), "[BACKUP] post {}: {}", number, preview(backup));
                    Post::from_backup(number, backup.to_string())
                }
            };
            posts.push(post);

            if number < total && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        process_info!(
            ProcessId::current(),
            "Generated {} posts ({} from backup)",
            posts.len(),
            posts.iter().filter(|p| p.backup).count()
        );
        posts
    }

    /// [`generate_batch`](Self::generate_batch) stamped with the run time
    pub async fn generate_post_batch(&self) -> PostBatch {
        PostBatch::new(self.generate_batch().await)
    }
}

/// First 50 characters for log lines
fn preview(content: &str) -> String {
    let head: String = content.chars().take(50).collect();
    let head = head.replace('\n', " ");
    if content.chars().count() > 50 {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockCompletionClient;
    use shared::ApiFailure;

    fn generator_with(client: MockCompletionClient) -> ContentGenerator<MockCompletionClient> {
        ContentGenerator::for_variant(client, PromptVariant::Detailed).with_pause(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_generate_returns_cleaned_content() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok("  \"'Hello world'\"  ".to_string()));

        let generator = generator_with(client);
        assert_eq!(generator.generate("prompt").await.as_deref(), Some("Hello world"));
    }

    #[tokio::test]
    async fn test_generate_sends_system_prompt_and_suffixed_user_message() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|system, user| {
                system.starts_with("You are a viral TWITTER trading content creator")
                    && user.starts_with("Write about patience.\n\nRespond with ONLY the post content.")
            })
            .times(1)
            .returning(|_, _| Ok("Patience pays.".to_string()));

        let generator = generator_with(client);
        assert_eq!(generator.generate("Write about patience.").await.as_deref(), Some("Patience pays."));
    }

    #[tokio::test]
    async fn test_generate_failure_is_none() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().returning(|_, _| Err(ApiFailure::Timeout));

        let generator = generator_with(client);
        assert!(generator.generate("prompt").await.is_none());
    }

    #[tokio::test]
    async fn test_generate_quote_only_reply_is_none() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().returning(|_, _| Ok("\"\"".to_string()));

        let generator = generator_with(client);
        assert!(generator.generate("prompt").await.is_none());
    }

    #[tokio::test]
    async fn test_batch_mixes_primary_and_backup() {
        let mut client = MockCompletionClient::new();
        let mut call = 0;
        client.expect_complete().times(5).returning(move |_, _| {
            call += 1;
            if call % 2 == 0 {
                Err(ApiFailure::ServerError("500".to_string()))
            } else {
                Ok(format!("post {call}"))
            }
        });

        let generator = generator_with(client);
        let posts = generator.generate_batch().await;

        assert_eq!(posts.len(), 5);
        assert_eq!(posts[0].content, "post 1");
        assert!(!posts[0].backup);
        assert_eq!(posts[1].content, generator.prompts().backups[1]);
        assert!(posts[1].backup);
        assert_eq!(posts[2].content, "post 3");
        assert!(posts[3].backup);
        let numbers: Vec<usize> = posts.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
        assert_eq!(preview("a\nb"), "a b");
    }
}
