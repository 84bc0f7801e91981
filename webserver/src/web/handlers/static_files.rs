//! Dashboard page, compiled into the binary

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the dashboard for `GET /`
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
