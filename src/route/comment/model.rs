pub use crate::route::post::model::PostPath;

use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A comment left on a post.
#[model]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
	/// The unique identifier of the comment.
	#[serde(skip_deserializing)]
	pub id: i64,
	/// The display name of the commenter.
	#[validate(length(min = 1, max = 255))]
	pub name: String,
	/// The email address of the commenter.
	#[validate(email)]
	pub email: String,
	/// The text of the comment.
	#[validate(length(min = 1))]
	pub body: String,
	/// The post the comment belongs to.
	#[serde(skip_deserializing)]
	pub post_id: i64,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct CommentPath {
	pub post_id: i64,
	pub comment_id: i64,
}
