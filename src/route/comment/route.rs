use axum::{extract::State, http::StatusCode};
use macros::route;

use crate::{
	extract::{Json, Path},
	openapi::tag,
	route::RouteError,
	service::CommentService,
};

use super::model;

/// Get comments of a post
/// Returns every comment under a post, in id order. An unknown post has no
/// comments.
#[route(tag = tag::COMMENT)]
pub async fn get_comments(
	State(comments): State<CommentService>,
	Path(path): Path<model::PostPath>,
) -> Result<Json<Vec<model::Comment>>, RouteError> {
	Ok(Json(comments.list_by_post(path.post_id).await?))
}

/// Get single comment
/// Returns a comment, provided it belongs to the post in the path.
#[route(tag = tag::COMMENT)]
pub async fn get_comment(
	State(comments): State<CommentService>,
	Path(path): Path<model::CommentPath>,
) -> Result<Json<model::Comment>, RouteError> {
	Ok(Json(comments.get(path.post_id, path.comment_id).await?))
}

/// Create comment
/// Leaves a new comment under a post.
#[route(tag = tag::COMMENT, response(status = 201, shape = "Json<model::Comment>"))]
pub async fn create_comment(
	State(comments): State<CommentService>,
	Path(path): Path<model::PostPath>,
	Json(input): Json<model::CommentInput>,
) -> Result<(StatusCode, Json<model::Comment>), RouteError> {
	Ok((
		StatusCode::CREATED,
		Json(comments.create(path.post_id, input).await?),
	))
}

/// Update comment
/// Replaces the name, email and body of a comment under a post.
#[route(tag = tag::COMMENT)]
pub async fn update_comment(
	State(comments): State<CommentService>,
	Path(path): Path<model::CommentPath>,
	Json(input): Json<model::CommentInput>,
) -> Result<Json<model::Comment>, RouteError> {
	Ok(Json(
		comments
			.update(path.post_id, path.comment_id, input)
			.await?,
	))
}

/// Delete comment
/// Deletes a comment under a post.
#[route(tag = tag::COMMENT)]
pub async fn delete_comment(
	State(comments): State<CommentService>,
	Path(path): Path<model::CommentPath>,
) -> Result<Json<String>, RouteError> {
	comments.delete(path.post_id, path.comment_id).await?;

	Ok(Json("Comment deleted successfully.".into()))
}
