//! Shared fixtures for forum-service integration tests.
#![allow(dead_code)]

pub mod failing_repository;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use forum_service::db::ensure_schema;
use forum_service::repository::{ForumRepository, SqlxForumRepository};
use serde_json::Value;
use std::sync::Arc;

/// Repository over a fresh in-memory database, wrapped as app data
pub async fn sqlite_repository() -> web::Data<Arc<dyn ForumRepository>> {
    let pool = db_pool::create_in_memory_pool()
        .await
        .expect("in-memory sqlite pool");
    ensure_schema(&pool).await.expect("forum schema");

    let repository: Arc<dyn ForumRepository> = Arc::new(SqlxForumRepository::new(pool));
    web::Data::new(repository)
}

/// Send a request and decode the JSON body (Null for an empty body)
pub async fn send<S, R, B, E>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = E>,
    B: MessageBody,
    E: std::fmt::Debug,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON response body")
    };
    (status, json)
}
