use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

use crate::service::{
	self,
	pagination::{self, Direction, PageRequest},
};

/// These can be removed when [`serde`] supports
/// literal defaults: <https://github.com/serde-rs/serde/issues/368>
#[inline]
fn default_page_size() -> u32 {
	pagination::DEFAULT_PAGE_SIZE
}

#[inline]
fn default_sort_by() -> String {
	pagination::DEFAULT_SORT_BY.into()
}

#[derive(Debug, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
	/// The page number to return (0-indexed).
	#[serde(default)]
	pub page_no: u32,
	/// The number of items to return per page.
	#[validate(range(min = 1, max = 100))]
	#[serde(default = "default_page_size")]
	pub page_size: u32,
	/// The attribute to sort by.
	#[serde(default = "default_sort_by")]
	pub sort_by: String,
	/// The sort direction, `asc` or `desc`.
	#[serde(default)]
	pub sort_dir: Direction,
}

impl TryFrom<PageInput> for PageRequest {
	type Error = service::Error;

	fn try_from(input: PageInput) -> Result<Self, Self::Error> {
		PageRequest::new(input.page_no, input.page_size, input.sort_by, input.sort_dir)
	}
}
