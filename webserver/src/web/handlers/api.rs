//! REST API handlers
//!
//! JSON endpoints used by the dashboard: on-demand generation, the batch
//! file listing, post viewing and PDF download.

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};

use generator::{BatchStore, CompletionClient, GeneratorError};
use shared::{PostBatch, ProcessId, logging, process_info, process_warn};

use crate::error::WebServerError;
use crate::state::WebServerState;

type AppState<C, S> = State<Arc<WebServerState<C, S>>>;

fn error_body(err: &WebServerError) -> (StatusCode, Json<Value>) {
    let message = match err {
        WebServerError::Generator(GeneratorError::FileNotFound { .. }) => "File not found".to_string(),
        other => other.to_string(),
    };
    (err.status_code(), Json(json!({ "error": message })))
}

fn not_configured() -> Json<Value> {
    Json(json!({
        "success": false,
        "error": WebServerError::NotConfigured.to_string()
    }))
}

async fn run_batch<C, S>(state: &WebServerState<C, S>) -> Option<PostBatch>
where
    C: CompletionClient,
    S: BatchStore,
{
    let generator = state.generator()?;
    let batch = generator.generate_post_batch().await;
    state.cache_batch(batch.clone()).await;
    Some(batch)
}

/// `POST /generate`: run a batch, write it to disk and cache it
pub async fn generate<C, S>(State(state): AppState<C, S>) -> Json<Value>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    let _generation = state.lock_generation().await;
    let Some(batch) = run_batch(&state).await else {
        process_warn!(ProcessId::current(), "Generation requested without an API key");
        return not_configured();
    };

    match state.store().write_batch(&batch).await {
        Ok(written) => {
            let file = written
                .pdf_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            logging::log_success(
                ProcessId::current(),
                &format!("Batch of {} posts written ({} from backup)", batch.len(), batch.backup_count()),
            );
            Json(json!({
                "success": true,
                "posts": batch.posts,
                "file": file
            }))
        }
        Err(e) => {
            logging::log_error(ProcessId::current(), "Writing batch", &e);
            Json(json!({ "success": false, "error": e.to_string() }))
        }
    }
}

/// `POST /api/generate`: run a batch in memory only
pub async fn api_generate<C, S>(State(state): AppState<C, S>) -> Json<Value>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    let _generation = state.lock_generation().await;
    match run_batch(&state).await {
        Some(batch) => Json(json!({ "success": true, "posts": batch.posts })),
        None => not_configured(),
    }
}

/// `GET /api/latest`: the cached batch, or an empty list after a restart
pub async fn api_latest<C, S>(State(state): AppState<C, S>) -> Json<Value>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    match state.latest_batch().await {
        Some(batch) => Json(json!({
            "success": true,
            "generated_at": batch.generated_at,
            "posts": batch.posts
        })),
        None => Json(json!({ "posts": [] })),
    }
}

/// `GET /files`
pub async fn list_files<C, S>(
    State(state): AppState<C, S>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    let files = state
        .store()
        .list_batches()
        .await
        .map_err(|e| error_body(&WebServerError::from(e)))?;
    Ok(Json(json!({ "files": files })))
}

/// `GET /view/:filename`
pub async fn view_file<C, S>(
    State(state): AppState<C, S>,
    Path(filename): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    let posts = state
        .store()
        .read_posts(&filename)
        .await
        .map_err(|e| error_body(&WebServerError::from(e)))?;
    Ok(Json(json!({ "posts": posts })))
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// `GET /download/:filename`: stored document as an attachment
pub async fn download_file<C, S>(
    State(state): AppState<C, S>,
    Path(filename): Path<String>,
) -> Response
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    match state.store().read_document(&filename).await {
        Ok(bytes) => {
            process_info!(ProcessId::current(), "Serving download {}", filename);
            let disposition = format!("attachment; filename=\"{filename}\"");
            (
                [
                    (header::CONTENT_TYPE, content_type_for(&filename).to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(GeneratorError::InvalidFileName { .. }) => {
            (StatusCode::BAD_REQUEST, "Invalid file name").into_response()
        }
        Err(GeneratorError::FileNotFound { .. }) => (StatusCode::NOT_FOUND, "File not found").into_response(),
        Err(e) => {
            logging::log_error(ProcessId::current(), "Download", &e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /health`
pub async fn health_check<C, S>(State(state): AppState<C, S>) -> Json<Value>
where
    C: CompletionClient + 'static,
    S: BatchStore + 'static,
{
    Json(json!({
        "status": "ok",
        "configured": state.is_configured(),
        "uptime": state.get_uptime_seconds()
    }))
}
