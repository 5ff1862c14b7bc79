//! Axum route handlers for the Enhancement API.

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Deserialize;
use tracing::debug;

use crate::enhancement::enhancer::{enhance, INVALID_PROMPT_MESSAGE};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceQuery {
    pub prompt: Option<String>,
}

/// GET /enhance?prompt=...
///
/// Returns the cleaned enhancement as `text/plain`. Validation failures, malformed
/// query strings included, are 400 with a JSON `{error}` body; upstream failures are 500.
pub async fn handle_enhance(
    State(state): State<AppState>,
    query: Result<Query<EnhanceQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected enhance query: {rejection}");
        AppError::Validation(INVALID_PROMPT_MESSAGE.to_string())
    })?;

    enhance(state.generator.as_ref(), query.prompt.as_deref()).await
}
