//! Liveness probe endpoint.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Path the probe is served on.
pub const HEALTH_PATH: &str = "/health";

/// `ANY /health` — always returns 200 OK with `{"status":"ok"}`.
///
/// No dependencies, no state, never blocks. Method, query string, and headers
/// are not inspected.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::header::CONTENT_TYPE};

    use super::*;

    #[tokio::test]
    async fn health_returns_fixed_json_payload() {
        let resp = health().await.into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }
}
