use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Liveness endpoint, mounted outside the authenticated `/api` scope.
///
/// Reports the service name and version alongside the current server time so
/// deploys can be sanity-checked with a single unauthenticated request.
///
/// ## Responses:
/// - `200 OK`: `{"status": "ok", "service": ..., "version": ..., "timestamp": ...}`.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}
