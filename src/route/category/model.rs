use macros::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A category that posts are filed under.
#[model]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	/// The unique identifier of the category.
	#[serde(skip_deserializing)]
	pub id: i64,
	/// The name of the category.
	#[validate(length(min = 1, max = 255))]
	pub name: String,
	/// What belongs in the category.
	#[serde(default)]
	pub description: String,
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct CategoryPath {
	pub category_id: i64,
}
