//! WebServer entry point
//!
//! Starts the dashboard. A missing API key does not stop the server: the
//! batch listing keeps working and generation requests report the problem.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use tokio::signal;

use generator::{
    ApiConfig, ContentGenerator, GeneratorError, OutputConfig, PromptVariant, RealBatchStore,
    RealCompletionClient,
};
use shared::{ProcessId, logging, process_info, process_warn};
use webserver::{WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Dashboard for generating and browsing post batches")]
struct Args {
    /// Port for HTTP server
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Folder holding generated batch files
    #[arg(long, default_value = "Output")]
    output_dir: PathBuf,

    /// Prompt set: detailed, compact or extended
    #[arg(long, default_value = "detailed")]
    variant: PromptVariant,

    /// Delay between completion calls in milliseconds
    #[arg(long, default_value_t = 500)]
    pause_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();
    let _ = dotenvy::dotenv();

    ProcessId::init_webserver();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup(ProcessId::current(), &format!("dashboard ({} prompts)", args.variant));

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid address: {}", e)))?;

    let generator = match ApiConfig::from_env() {
        Ok(config) => {
            process_info!(ProcessId::current(), "Using model {} at {}", config.model, config.api_base);
            let client = RealCompletionClient::new(config)?;
            Some(
                ContentGenerator::for_variant(client, args.variant)
                    .with_pause(Duration::from_millis(args.pause_ms)),
            )
        }
        Err(GeneratorError::MissingApiKey) => {
            process_warn!(ProcessId::current(), "⚠️ DEEPSEEK_API_KEY not set, generation is disabled");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let store = RealBatchStore::new(OutputConfig { folder: args.output_dir });
    let webserver = WebServer::new(generator, store);

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal"),
            Err(err) => logging::log_error(ProcessId::current(), "Signal handling", &err),
        }
    };

    webserver.run(http_addr, shutdown).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
