//! Page fragment handler backing the "load page" modal.

use crate::{error::HttpError, AppState};
use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};
use std::io::ErrorKind;
use tracing::debug;

/// Fragment served when the web root has no page file of its own.
pub const DEFAULT_PAGE_FRAGMENT: &str = include_str!("../../assets/page.html");

/// Serve the configured page fragment, falling back to the built-in one.
///
/// # Errors
/// Returns an internal error when the page file exists but cannot be read.
pub async fn page_fragment(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let path = state.page_file();
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no page file at {}; serving built-in fragment", path.display());
            Ok(Html(DEFAULT_PAGE_FRAGMENT.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
