mod scrape;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use ordex_scraper::ScrapeOptions;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::request_id;

/// Rendered order-history pages run well past axum's 2 MB default.
const MAX_PAGE_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub options: Arc<ScrapeOptions>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Transport-level failure. Extraction failures are not `ApiError`s; they
/// travel inside a `200` scrape response as `{ "error": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "bad_request" | "unsupported_message" => StatusCode::BAD_REQUEST,
            "payload_too_large" => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/scrape", post(scrape::scrape_page))
        .layer(DefaultBodyLimit::max(MAX_PAGE_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="order-card js-order-card">
          <div class="yohtmlc-order-id"><span dir="ltr">114-5551234-0000001</span></div>
          <div class="delivery-box">
            <div class="a-fixed-right-grid-col a-col-left">
              <div class="item-box">
                <div class="yohtmlc-product-title"><a href="/dp/B000000001">A</a></div>
              </div>
              <div class="item-box">
                <div class="yohtmlc-product-title"><a href="/dp/B000000002">B</a></div>
              </div>
            </div>
          </div>
        </div>
        <div class="order-card js-order-card"></div>
    </body></html>"#;

    fn app() -> Router {
        build_app(AppState {
            options: Arc::new(ScrapeOptions::default()),
        })
    }

    async fn post_json(body: String) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scrape")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&bytes).expect("json parse");
        (status, json)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn scrape_returns_retained_orders() {
        let body = serde_json::json!({ "type": "SCRAPE_ORDERS", "html": PAGE }).to_string();
        let (status, json) = post_json(body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json.get("error").is_none());
        let orders = json["orders"].as_array().expect("orders array");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0]["orderNumber"], "114-5551234-0000001");
        let items = orders[0]["items"].as_array().expect("items array");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "A");
        assert_eq!(items[1]["quantity"], 1);
        assert_eq!(items[1]["productUrl"], "https://www.amazon.com/dp/B000000002");
    }

    #[tokio::test]
    async fn scrape_of_page_without_orders_is_empty_list() {
        let body = serde_json::json!({ "type": "SCRAPE_ORDERS", "html": "<p>Sign in</p>" })
            .to_string();
        let (status, json) = post_json(body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "orders": [] }));
    }

    #[tokio::test]
    async fn unknown_message_type_is_bad_request() {
        let body = serde_json::json!({ "type": "PING", "html": "" }).to_string();
        let (status, json) = post_json(body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "unsupported_message");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let (status, json) = post_json("{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "bad_request");
        assert!(json["meta"]["request_id"].is_string());
    }

    #[test]
    fn api_error_codes_map_to_status() {
        let response = ApiError::new("req-1", "bad_request", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let response = ApiError::new("req-1", "internal_error", "boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
