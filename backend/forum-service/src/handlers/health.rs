use crate::repository::ForumRepository;
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// Liveness plus a store round-trip
pub async fn health_check(repo: web::Data<Arc<dyn ForumRepository>>) -> HttpResponse {
    match repo.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "forum-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": "database unavailable",
                "service": "forum-service"
            }))
        }
    }
}
