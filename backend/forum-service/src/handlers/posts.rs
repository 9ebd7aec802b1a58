/// Post handlers - HTTP endpoints for post operations
use super::{parse_body, respond};
use crate::error::{AppError, Result};
use crate::models::{NewPost, Vote};
use crate::repository::ForumRepository;
use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub text: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditPostRequest {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoteRequest {
    pub vote: Option<serde_json::Value>,
}

/// List every post
pub async fn list_posts(repo: web::Data<Arc<dyn ForumRepository>>) -> Result<HttpResponse> {
    let posts = repo.list_posts().await?;
    Ok(respond(StatusCode::OK, posts))
}

/// Create a new post
pub async fn create_post(
    repo: web::Data<Arc<dyn ForumRepository>>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let req: CreatePostRequest = parse_body(&body)?;

    let post = repo
        .create_post(NewPost {
            text: req.text.unwrap_or_default(),
            username: req.username.unwrap_or_default(),
        })
        .await?;

    tracing::info!(post_id = post.id, username = %post.username, "post created");
    Ok(respond(StatusCode::CREATED, post))
}

/// Get a post by ID
pub async fn get_post(
    repo: web::Data<Arc<dyn ForumRepository>>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    match repo.get_post(*post_id).await? {
        Some(post) => Ok(respond(StatusCode::OK, post)),
        None => Err(AppError::post_not_found()),
    }
}

/// Replace a post's text; a body without `text` leaves the post as it is
pub async fn edit_post(
    repo: web::Data<Arc<dyn ForumRepository>>,
    post_id: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    if repo.get_post(post_id).await?.is_none() {
        tracing::debug!(post_id, "edit on missing post");
        return Err(AppError::post_not_found());
    }

    let req: EditPostRequest = parse_body(&body)?;
    let post = repo
        .update_post_text(post_id, req.text.as_deref())
        .await?
        .ok_or_else(AppError::post_not_found)?;

    tracing::info!(post_id, text_changed = req.text.is_some(), "post edited");
    Ok(respond(StatusCode::OK, post))
}

/// Delete a post and its comments, answering with the deleted post
pub async fn delete_post(
    repo: web::Data<Arc<dyn ForumRepository>>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let post = repo
        .delete_post(*post_id)
        .await?
        .ok_or_else(AppError::post_not_found)?;

    tracing::info!(post_id = post.id, "post deleted");
    Ok(respond(StatusCode::OK, post))
}

/// Up- or downvote a post
pub async fn vote_post(
    repo: web::Data<Arc<dyn ForumRepository>>,
    post_id: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    if repo.get_post(post_id).await?.is_none() {
        tracing::debug!(post_id, "vote on missing post");
        return Err(AppError::post_not_found());
    }

    let req: VoteRequest = parse_body(&body)?;
    let vote = Vote::from_json(req.vote.as_ref());
    let post = repo
        .vote_post(post_id, vote)
        .await?
        .ok_or_else(AppError::post_not_found)?;

    tracing::info!(post_id, ?vote, score = post.score, "post voted");
    Ok(respond(StatusCode::OK, post))
}
