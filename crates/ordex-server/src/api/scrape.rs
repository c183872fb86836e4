use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use ordex_core::{ScrapeRequest, ScrapeResponse};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `POST /api/v1/scrape`: runs the page-context responder on the submitted
/// page.
///
/// Extraction failures come back as `200 { "error": ... }`. Only requests the
/// responder will not answer (bad JSON, other message kinds) are errors at
/// the HTTP level.
pub(super) async fn scrape_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            "payload_too_large"
        } else {
            "bad_request"
        };
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected scrape request body");
        ApiError::new(req_id.0.clone(), code, rejection.body_text())
    })?;

    let options = state.options.clone();
    let kind = request.kind.clone();
    let html_bytes = request.html.len();
    let response = tokio::task::spawn_blocking(move || ordex_scraper::respond(&request, &options))
        .await
        .map_err(|e| {
            tracing::error!(request_id = %req_id.0, error = %e, "scrape task failed");
            ApiError::new(req_id.0.clone(), "internal_error", "scrape task failed")
        })?;

    let Some(response) = response else {
        return Err(ApiError::new(
            req_id.0,
            "unsupported_message",
            format!("unsupported message type: {kind}"),
        ));
    };

    tracing::info!(request_id = %req_id.0, html_bytes, "answered scrape request");
    Ok(Json(response))
}
