/// HTTP handlers for forum endpoints
///
/// This module contains handlers for:
/// - Posts: list, create, read, edit, delete, vote
/// - Comments: list per post, create, vote
/// - Health: liveness plus a store round-trip
///
/// Every successful response is wrapped as `{"success": true, "data": ...}`;
/// failures go through `AppError` and come out as `{"success": false, "error": ...}`.
pub mod comments;
pub mod health;
pub mod posts;

use crate::error::Result;
use actix_web::{http::header, http::StatusCode, web, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export handler functions at module level
pub use comments::{create_comment, get_post_comments, vote_comment};
pub use health::health_check;
pub use posts::{create_post, delete_post, edit_post, get_post, list_posts, vote_post};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Build a success envelope response
pub(crate) fn respond<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(Envelope {
        success: true,
        data,
    })
}

/// Parse a JSON request body leniently.
///
/// Bodies are read as raw bytes rather than through `web::Json` so handlers can
/// look up the addressed entity first: a request against a missing id answers
/// 404 no matter what it carries. An empty body means "no fields".
pub(crate) fn parse_body<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// Fallback for unmatched requests: a path missing only its trailing slash is
/// redirected with 308 so the method and body survive; anything else is 404.
pub async fn redirect_to_slash(req: HttpRequest) -> HttpResponse {
    let path = req.path();
    if !path.ends_with('/') {
        let slashed = format!("{}/", path);
        if req.resource_map().has_resource(&slashed) {
            let location = match req.query_string() {
                "" => slashed,
                query => format!("{}?{}", slashed, query),
            };
            tracing::debug!(from = %path, to = %location, "redirecting to canonical path");
            return HttpResponse::PermanentRedirect()
                .insert_header((header::LOCATION, location))
                .finish();
        }
    }
    HttpResponse::NotFound().finish()
}

/// Register every forum route on an app or scope.
///
/// The injected `web::Data<Arc<dyn ForumRepository>>` must be registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_posts))
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/api/posts/")
                .route(web::get().to(list_posts))
                .route(web::post().to(create_post)),
        )
        .service(
            web::resource("/api/post/{post_id}/")
                .route(web::get().to(get_post))
                .route(web::post().to(edit_post))
                .route(web::delete().to(delete_post)),
        )
        .route("/api/post/{post_id}/vote/", web::post().to(vote_post))
        .route(
            "/api/post/{post_id}/comments/",
            web::get().to(get_post_comments),
        )
        .route(
            "/api/post/{post_id}/comment/",
            web::post().to(create_comment),
        )
        .route(
            "/api/comment/{comment_id}/vote/",
            web::post().to(vote_comment),
        )
        .default_service(web::to(redirect_to_slash));
}
