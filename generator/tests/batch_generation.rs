//! Batch generation integration tests
//!
//! Drives `ContentGenerator` through the public API with a mocked completion
//! client and checks the batch-level guarantees: one post per prompt, the
//! word cap, and deterministic backup substitution.

use std::time::Duration;

use generator::{ContentGenerator, MockCompletionClient, PromptSet, PromptVariant};
use shared::ApiFailure;

fn quiet(client: MockCompletionClient, variant: PromptVariant) -> ContentGenerator<MockCompletionClient> {
    ContentGenerator::for_variant(client, variant).with_pause(Duration::ZERO)
}

fn always_failing() -> MockCompletionClient {
    let mut client = MockCompletionClient::new();
    client
        .expect_complete()
        .returning(|_, _| Err(ApiFailure::ServiceUnavailable));
    client
}

#[tokio::test]
async fn test_batch_length_matches_prompt_count() {
    for variant in PromptVariant::ALL {
        let expected = PromptSet::for_variant(variant).len();
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(expected)
            .returning(|_, _| Ok("A short post.".to_string()));

        let posts = quiet(client, variant).generate_batch().await;
        assert_eq!(posts.len(), expected, "variant {variant}");
        assert!(posts.iter().all(|p| !p.backup));
    }
}

#[tokio::test]
async fn test_short_content_is_kept_verbatim() {
    let mut client = MockCompletionClient::new();
    client
        .expect_complete()
        .returning(|_, _| Ok("Most traders want the results, but not the process.".to_string()));

    let posts = quiet(client, PromptVariant::Compact).generate_batch().await;
    for post in &posts {
        assert_eq!(post.content, "Most traders want the results, but not the process.");
        assert!(!post.backup);
    }
}

#[tokio::test]
async fn test_long_content_is_capped_at_120_words() {
    let long: String = (1..=150).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
    let mut client = MockCompletionClient::new();
    client.expect_complete().returning(move |_, _| Ok(long.clone()));

    let posts = quiet(client, PromptVariant::Detailed).generate_batch().await;
    let first = &posts[0];
    assert!(first.content.ends_with("word120..."));
    assert_eq!(first.content.split(' ').count(), 120);
    assert!(!first.backup);
}

#[tokio::test]
async fn test_failures_use_indexed_backups() {
    for variant in PromptVariant::ALL {
        let prompts = PromptSet::for_variant(variant);
        let posts = quiet(always_failing(), variant).generate_batch().await;

        assert_eq!(posts.len(), prompts.len());
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.number, i + 1);
            assert_eq!(post.content, prompts.backups[i % prompts.backups.len()]);
            assert!(post.backup);
        }
    }
}

#[tokio::test]
async fn test_extended_backups_wrap_around() {
    let prompts = PromptSet::for_variant(PromptVariant::Extended);
    assert_eq!(prompts.len(), 10);
    assert_eq!(prompts.backups.len(), 5);

    let posts = quiet(always_failing(), PromptVariant::Extended).generate_batch().await;
    assert_eq!(posts[5].content, posts[0].content);
    assert_eq!(posts[9].content, prompts.backups[4]);
}

#[tokio::test]
async fn test_all_failures_are_deterministic() {
    let first = quiet(always_failing(), PromptVariant::Detailed).generate_batch().await;
    let second = quiet(always_failing(), PromptVariant::Detailed).generate_batch().await;

    let contents = |posts: &[shared::Post]| posts.iter().map(|p| p.content.clone()).collect::<Vec<_>>();
    assert_eq!(contents(&first), contents(&second));
}

#[tokio::test]
async fn test_backup_flag_serialization() {
    let mut client = MockCompletionClient::new();
    let mut call = 0;
    client.expect_complete().returning(move |_, _| {
        call += 1;
        if call == 1 {
            Ok("Fresh take.".to_string())
        } else {
            Err(ApiFailure::Timeout)
        }
    });

    let batch = quiet(client, PromptVariant::Compact).generate_post_batch().await;
    assert_eq!(batch.backup_count(), 4);

    let json = serde_json::to_value(&batch.posts).unwrap();
    assert!(json[0].get("backup").is_none());
    assert_eq!(json[1]["backup"], true);
    assert_eq!(json[0]["number"], 1);
    assert!(json[0]["timestamp"].is_string());
}

#[tokio::test(start_paused = true)]
async fn test_pause_only_between_calls() {
    let mut client = MockCompletionClient::new();
    client.expect_complete().returning(|_, _| Ok("ok".to_string()));
    let generator = ContentGenerator::for_variant(client, PromptVariant::Compact)
        .with_pause(Duration::from_millis(20));

    let started = tokio::time::Instant::now();
    generator.generate_batch().await;
    // Four gaps for five prompts, none after the last call
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(80), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(100), "elapsed {elapsed:?}");
}

#[tokio::test]
async fn test_reply_with_quoted_phrase_is_kept_verbatim() {
    let reply = "'All in' is stupid. Stop chasing 'perfect' entries and size like a pro";
    let mut client = MockCompletionClient::new();
    client.expect_complete().returning(move |_, _| Ok(reply.to_string()));

    let posts = quiet(client, PromptVariant::Compact).generate_batch().await;
    assert!(posts.iter().all(|p| p.content == reply && !p.backup));
}
