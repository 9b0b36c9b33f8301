use axum::{extract::State, http::StatusCode};
use macros::route;

use crate::{
	extract::{Admin, Json, Path},
	openapi::tag,
	route::RouteError,
	service::CategoryService,
};

use super::model;

/// Get all categories
/// Returns every category, in id order.
#[route(tag = tag::CATEGORY)]
pub async fn get_categories(
	State(categories): State<CategoryService>,
) -> Result<Json<Vec<model::Category>>, RouteError> {
	Ok(Json(categories.list().await?))
}

/// Get single category
#[route(tag = tag::CATEGORY)]
pub async fn get_category(
	State(categories): State<CategoryService>,
	Path(path): Path<model::CategoryPath>,
) -> Result<Json<model::Category>, RouteError> {
	Ok(Json(categories.get(path.category_id).await?))
}

/// Create category
#[route(tag = tag::CATEGORY, response(status = 201, shape = "Json<model::Category>"))]
pub async fn create_category(
	State(categories): State<CategoryService>,
	_: Admin,
	Json(input): Json<model::CategoryInput>,
) -> Result<(StatusCode, Json<model::Category>), RouteError> {
	Ok((StatusCode::CREATED, Json(categories.create(input).await?)))
}

/// Update category
/// Replaces the name and description of a category.
#[route(tag = tag::CATEGORY)]
pub async fn update_category(
	State(categories): State<CategoryService>,
	_: Admin,
	Path(path): Path<model::CategoryPath>,
	Json(input): Json<model::CategoryInput>,
) -> Result<Json<model::Category>, RouteError> {
	Ok(Json(categories.update(input, path.category_id).await?))
}

/// Delete category
/// Deletes a category. Posts filed under it are kept.
#[route(tag = tag::CATEGORY)]
pub async fn delete_category(
	State(categories): State<CategoryService>,
	_: Admin,
	Path(path): Path<model::CategoryPath>,
) -> Result<Json<String>, RouteError> {
	categories.delete(path.category_id).await?;

	Ok(Json("Category deleted successfully.".into()))
}
