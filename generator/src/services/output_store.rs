//! Flat-file batch storage: text and PDF renderings in an output folder

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use chrono::NaiveDate;

use shared::{PostBatch, ProcessId, process_info};
use crate::error::{GeneratorError, GeneratorResult};
use crate::services::pdf::render_batch;
use crate::traits::BatchStore;
use crate::types::{BatchFile, OutputConfig, WrittenBatch};

const FILE_PREFIX: &str = "Twitter_Posts_";
const TITLE: &str = "Daily Twitter Trading Posts";
const RULE_WIDTH: usize = 60;

/// Real batch store writing into a local folder
#[derive(Debug, Clone)]
pub struct RealBatchStore {
    folder: PathBuf,
}

impl RealBatchStore {
    pub fn new(config: OutputConfig) -> Self {
        Self { folder: config.folder }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Resolve a client-supplied file name inside the output folder
    async fn resolve(&self, file_name: &str) -> GeneratorResult<PathBuf> {
        if file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name.contains("..")
        {
            return Err(GeneratorError::InvalidFileName { name: file_name.to_string() });
        }

        let path = self.folder.join(file_name);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(GeneratorError::FileNotFound { name: file_name.to_string() });
        }
        Ok(path)
    }
}

#[async_trait]
impl BatchStore for RealBatchStore {
    async fn write_batch(&self, batch: &PostBatch) -> GeneratorResult<WrittenBatch> {
        tokio::fs::create_dir_all(&self.folder).await?;

        let date_str = batch.generated_at.format("%Y%m%d");
        let txt_path = self.folder.join(format!("{FILE_PREFIX}{date_str}.txt"));
        let pdf_path = self.folder.join(format!("{FILE_PREFIX}{date_str}.pdf"));

        tokio::fs::write(&txt_path, render_text(batch)).await?;
        process_info!(ProcessId::current(), "Text saved: {}", txt_path.display());

        let pdf = render_batch(batch)?;
        tokio::fs::write(&pdf_path, pdf).await?;
        process_info!(ProcessId::current(), "PDF saved: {}", pdf_path.display());

        Ok(WrittenBatch { pdf_path, txt_path })
    }

    async fn list_batches(&self) -> GeneratorResult<Vec<BatchFile>> {
        let mut entries = match tokio::fs::read_dir(&self.folder).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut pdf_names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(FILE_PREFIX) && name.ends_with(".pdf") {
                pdf_names.push(name);
            }
        }
        pdf_names.sort_unstable_by(|a, b| b.cmp(a));

        let mut files = Vec::with_capacity(pdf_names.len());
        for name in pdf_names {
            let stem = name.trim_end_matches(".pdf");
            let txt_name = format!("{stem}.txt");
            let txt_path = if tokio::fs::try_exists(self.folder.join(&txt_name)).await.unwrap_or(false) {
                Some(txt_name)
            } else {
                None
            };
            files.push(BatchFile {
                date: display_date(stem),
                pdf_path: name.clone(),
                name,
                txt_path,
            });
        }
        Ok(files)
    }

    async fn read_posts(&self, file_name: &str) -> GeneratorResult<Vec<String>> {
        let path = self.resolve(file_name).await?;
        let text = tokio::fs::read_to_string(&path).await?;
        Ok(parse_text(&text))
    }

    async fn read_document(&self, file_name: &str) -> GeneratorResult<Vec<u8>> {
        let path = self.resolve(file_name).await?;
        Ok(tokio::fs::read(&path).await?)
    }
}

/// Plain-text rendering of a batch
pub fn render_text(batch: &PostBatch) -> String {
    let mut out = String::new();
    out.push_str(&format!("{TITLE}\n"));
    out.push_str(&format!("Date: {}\n", batch.generated_at.format("%Y-%m-%d")));
    out.push_str(&format!("Time: {}\n", batch.generated_at.format("%H:%M:%S")));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for post in &batch.posts {
        out.push_str(&format!("{}. {}\n\n", post.number, post.content));
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }
    out
}

/// Recover post contents from [`render_text`] output.
///
/// Posts are split on the dash rules rather than on leading numbers, so
/// numbered lists inside a post stay intact.
pub fn parse_text(text: &str) -> Vec<String> {
    let header_rule = "=".repeat(RULE_WIDTH);
    let post_rule = "-".repeat(RULE_WIDTH);

    let lines: Vec<&str> = text.lines().collect();
    let body_start = lines
        .iter()
        .position(|line| line.trim() == header_rule)
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut posts = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in &lines[body_start..] {
        if line.trim() == post_rule {
            push_post(&mut posts, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_post(&mut posts, &current);
    posts
}

fn push_post(posts: &mut Vec<String>, lines: &[&str]) {
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return;
    }
    posts.push(strip_number(trimmed).to_string());
}

/// Drop a leading `N. ` post number
fn strip_number(post: &str) -> &str {
    let digits = post.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && post[digits..].starts_with('.') {
        post[digits + 1..].trim_start()
    } else {
        post
    }
}

/// `Twitter_Posts_20250102` -> `January 02, 2025`, or the raw suffix
fn display_date(stem: &str) -> String {
    let raw = stem.rsplit('_').next().unwrap_or(stem);
    match NaiveDate::parse_from_str(raw, "%Y%m%d") {
        Ok(date) => date.format("%B %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
