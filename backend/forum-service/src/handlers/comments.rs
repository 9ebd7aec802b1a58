/// Comment handlers - HTTP endpoints for comment operations
use super::posts::VoteRequest;
use super::{parse_body, respond};
use crate::error::{AppError, Result};
use crate::models::{NewComment, Vote};
use crate::repository::ForumRepository;
use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

/// Request body for creating a comment
#[derive(Debug, Default, Deserialize)]
pub struct CreateCommentRequest {
    pub text: Option<String>,
    pub username: Option<String>,
}

/// Get comments for a post
pub async fn get_post_comments(
    repo: web::Data<Arc<dyn ForumRepository>>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let comments = repo
        .list_comments(*post_id)
        .await?
        .ok_or_else(AppError::post_not_found)?;

    Ok(respond(StatusCode::OK, comments))
}

/// Create a new comment
///
/// Answers 200 rather than 201, unlike post creation; existing clients rely on it.
pub async fn create_comment(
    repo: web::Data<Arc<dyn ForumRepository>>,
    post_id: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    if repo.get_post(post_id).await?.is_none() {
        tracing::debug!(post_id, "comment on missing post");
        return Err(AppError::post_not_found());
    }

    let req: CreateCommentRequest = parse_body(&body)?;
    let comment = repo
        .create_comment(
            post_id,
            NewComment {
                text: req.text.unwrap_or_default(),
                username: req.username.unwrap_or_default(),
            },
        )
        .await?
        .ok_or_else(AppError::post_not_found)?;

    tracing::info!(post_id, comment_id = comment.id, "comment created");
    Ok(respond(StatusCode::OK, comment))
}

/// Up- or downvote a comment
pub async fn vote_comment(
    repo: web::Data<Arc<dyn ForumRepository>>,
    comment_id: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let comment_id = comment_id.into_inner();
    if repo.get_comment(comment_id).await?.is_none() {
        tracing::debug!(comment_id, "vote on missing comment");
        return Err(AppError::comment_not_found());
    }

    let req: VoteRequest = parse_body(&body)?;
    let vote = Vote::from_json(req.vote.as_ref());
    let comment = repo
        .vote_comment(comment_id, vote)
        .await?
        .ok_or_else(AppError::comment_not_found)?;

    tracing::info!(comment_id, ?vote, score = comment.score, "comment voted");
    Ok(respond(StatusCode::OK, comment))
}
