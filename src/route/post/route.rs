use axum::{extract::State, http::StatusCode};
use macros::route;

use crate::{
	extract::{Admin, Json, Path, Query},
	openapi::tag,
	route::RouteError,
	service::{
		pagination::{Page, PageRequest},
		PostService,
	},
};

use super::model;

/// Get all posts
/// Returns one page of posts. Pages are numbered from zero and sorted by
/// `sortBy` (`id`, `title`, `description`, `content` or `categoryId`).
#[route(tag = tag::POST)]
pub async fn get_posts(
	State(posts): State<PostService>,
	Query(page): Query<model::PageInput>,
) -> Result<Json<Page<model::Post>>, RouteError> {
	let request = PageRequest::try_from(page)?;

	Ok(Json(posts.list(&request).await?))
}

/// Get single post
/// Returns a single post by its unique id.
#[route(tag = tag::POST)]
pub async fn get_post(
	State(posts): State<PostService>,
	Path(path): Path<model::PostPath>,
) -> Result<Json<model::Post>, RouteError> {
	Ok(Json(posts.get(path.post_id).await?))
}

/// Get posts by category
/// Returns every post filed under a category, in id order.
#[route(tag = tag::POST)]
pub async fn get_category_posts(
	State(posts): State<PostService>,
	Path(path): Path<model::CategoryPath>,
) -> Result<Json<Vec<model::Post>>, RouteError> {
	Ok(Json(posts.list_by_category(path.category_id).await?))
}

/// Create post
/// Creates a new post under an existing category.
#[route(tag = tag::POST, response(status = 201, shape = "Json<model::Post>"))]
pub async fn create_post(
	State(posts): State<PostService>,
	_: Admin,
	Json(input): Json<model::PostInput>,
) -> Result<(StatusCode, Json<model::Post>), RouteError> {
	Ok((StatusCode::CREATED, Json(posts.create(input).await?)))
}

/// Update post
/// Replaces the title, description, content and category of a post.
#[route(tag = tag::POST)]
pub async fn update_post(
	State(posts): State<PostService>,
	_: Admin,
	Path(path): Path<model::PostPath>,
	Json(input): Json<model::PostInput>,
) -> Result<Json<model::Post>, RouteError> {
	Ok(Json(posts.update(input, path.post_id).await?))
}

/// Delete post
/// Deletes a post and every comment under it.
#[route(tag = tag::POST)]
pub async fn delete_post(
	State(posts): State<PostService>,
	_: Admin,
	Path(path): Path<model::PostPath>,
) -> Result<Json<String>, RouteError> {
	posts.delete(path.post_id).await?;

	Ok(Json("Post deleted successfully.".into()))
}
