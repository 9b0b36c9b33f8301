pub use crate::route::{category::model::CategoryPath, model::PageInput};

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single blog post, filed under a category.
#[model]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	/// The unique identifier of the post.
	#[serde(skip_deserializing)]
	pub id: i64,
	/// The title of the post.
	#[validate(length(min = 1, max = 255))]
	pub title: String,
	/// A short summary of the post.
	#[serde(default)]
	pub description: String,
	/// The content of the post in Markdown format.
	#[validate(length(min = 1))]
	pub content: String,
	/// The category the post is filed under.
	pub category_id: i64,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct PostPath {
	pub post_id: i64,
}
