use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Serves the upload form. The page is compiled into the binary.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
