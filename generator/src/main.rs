//! Generator binary entry point
//!
//! Runs one batch and writes it to the output folder. Intended for cron or
//! a task scheduler: it runs once and exits.

use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;

use shared::{ProcessId, logging, process_info};
use generator::{
    ApiConfig, BatchStore, ContentGenerator, GeneratorResult, OutputConfig, PromptVariant,
    RealBatchStore, RealCompletionClient,
};

#[derive(Parser, Debug)]
#[command(name = "generator")]
#[command(about = "Generate a batch of trading posts and save them as text and PDF")]
struct Args {
    /// Prompt set: detailed, compact or extended
    #[arg(long, default_value = "detailed")]
    variant: PromptVariant,

    /// Folder for the generated documents
    #[arg(long, default_value = "Output")]
    output_dir: PathBuf,

    /// Delay between completion calls in milliseconds
    #[arg(long, default_value_t = 500)]
    pause_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    ProcessId::init_generator();
    logging::init_tracing(Some(&args.log_level));

    if let Err(e) = run(args).await {
        logging::log_error(ProcessId::current(), "Generation", &e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> GeneratorResult<()> {
    let _ = dotenvy::dotenv();

    // Fail before any call is attempted when the key is missing
    let api_config = ApiConfig::from_env()?;

    logging::log_startup(
        ProcessId::current(),
        &format!("post generator ({} prompts, model {})", args.variant, api_config.model),
    );

    let client = RealCompletionClient::new(api_config)?;
    let content_generator = ContentGenerator::for_variant(client, args.variant)
        .with_pause(Duration::from_millis(args.pause_ms));
    let store = RealBatchStore::new(OutputConfig { folder: args.output_dir });

    let batch = content_generator.generate_post_batch().await;
    let written = store.write_batch(&batch).await?;

    process_info!(ProcessId::current(), "PDF file: {}", written.pdf_path.display());
    process_info!(ProcessId::current(), "Text file: {}", written.txt_path.display());
    logging::log_success(
        ProcessId::current(),
        &format!(
            "Content generation complete: {} posts, {} from backup",
            batch.len(),
            batch.backup_count()
        ),
    );
    Ok(())
}
