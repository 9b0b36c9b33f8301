//! Paged, sorted listing.
//!
//! A [`PageRequest`] is resolved against the sortable fields of an entity,
//! turned into a [`Sort`] and a [`Window`], and handed to a [`PageSource`].
//! Ordering is always made total by breaking ties on the identifier, so
//! repeated calls against unchanged data return the same pages.
//!
//! Page numbers past the end are not an error: they produce an empty page
//! flagged as the last one.

use std::{cmp::Ordering, fmt, num::NonZeroU32, str::FromStr};

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Error;
use crate::{entity::Entity, store};

pub const DEFAULT_PAGE_NO: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT_BY: &str = "id";

/// The direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
	#[default]
	Asc,
	Desc,
}

impl Direction {
	pub fn as_sql(self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}

	fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Asc => ordering,
			Self::Desc => ordering.reverse(),
		}
	}
}

impl FromStr for Direction {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if value.eq_ignore_ascii_case("asc") || value.eq_ignore_ascii_case("ascending") {
			Ok(Self::Asc)
		} else if value.eq_ignore_ascii_case("desc") || value.eq_ignore_ascii_case("descending") {
			Ok(Self::Desc)
		} else {
			Err(Error::ValidationFailed {
				field: "sortDir",
				reason: format!("unknown sort direction `{value}`").into(),
			})
		}
	}
}

impl TryFrom<String> for Direction {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// An entity that can be listed through the pagination engine.
pub trait Sortable: Entity {
	type Field: Copy + fmt::Debug + Send + Sync;

	/// Resolves a public attribute name, or `None` if sorting by it is not allowed.
	fn sort_field(name: &str) -> Option<Self::Field>;

	fn compare_by(&self, other: &Self, field: Self::Field) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
	pub field: F,
	pub direction: Direction,
}

/// The contiguous slice `[offset, offset + limit)` of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
	pub offset: u64,
	pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
	pub page_no: u32,
	pub page_size: NonZeroU32,
	pub sort_by: String,
	pub sort_dir: Direction,
}

impl Default for PageRequest {
	fn default() -> Self {
		Self {
			page_no: DEFAULT_PAGE_NO,
			page_size: NonZeroU32::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1),
			sort_by: DEFAULT_SORT_BY.into(),
			sort_dir: Direction::Asc,
		}
	}
}

impl PageRequest {
	pub fn new(
		page_no: u32,
		page_size: u32,
		sort_by: impl Into<String>,
		sort_dir: Direction,
	) -> Result<Self, Error> {
		let page_size = NonZeroU32::new(page_size).ok_or(Error::ValidationFailed {
			field: "pageSize",
			reason: "must be greater than zero".into(),
		})?;

		Ok(Self {
			page_no,
			page_size,
			sort_by: sort_by.into(),
			sort_dir,
		})
	}

	pub fn window(&self) -> Window {
		Window {
			offset: u64::from(self.page_no) * u64::from(self.page_size.get()),
			limit: self.page_size.get(),
		}
	}

	/// Resolves the requested sort against the attributes of `T`.
	pub fn sort<T: Sortable>(&self) -> Result<Sort<T::Field>, Error> {
		let field = T::sort_field(&self.sort_by).ok_or_else(|| Error::InvalidSort {
			field: self.sort_by.clone(),
		})?;

		Ok(Sort {
			field,
			direction: self.sort_dir,
		})
	}
}

/// One page of a listing, with enough metadata to walk the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
	/// The items in this page, in order.
	pub content: Vec<T>,
	/// The requested page number (0-indexed).
	pub page_no: u32,
	/// The requested page size.
	pub page_size: u32,
	/// The number of items across all pages.
	pub total_elements: u64,
	/// The number of pages of `pageSize` items.
	pub total_pages: u64,
	/// Whether no page follows this one.
	pub last: bool,
}

impl<T> Page<T> {
	pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
		let total_pages = total_elements.div_ceil(u64::from(request.page_size.get()));

		Self {
			content,
			page_no: request.page_no,
			page_size: request.page_size.get(),
			total_elements,
			total_pages,
			last: u64::from(request.page_no) + 1 >= total_pages,
		}
	}

	pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
		Page {
			content: self.content.into_iter().map(f).collect(),
			page_no: self.page_no,
			page_size: self.page_size,
			total_elements: self.total_elements,
			total_pages: self.total_pages,
			last: self.last,
		}
	}
}

/// A collection that can be counted and read one window at a time.
#[async_trait]
pub trait PageSource<T: Sortable>: Send + Sync {
	async fn count(&self) -> store::Result<u64>;

	/// Returns the records in `window` after ordering by `sort`, ties broken
	/// by identifier ascending. Text is ordered bytewise, so `"B"` comes
	/// before `"a"`.
	async fn fetch(&self, sort: Sort<T::Field>, window: Window) -> store::Result<Vec<T>>;
}

/// Lists one page of `source`.
pub async fn list_page<T, S>(source: &S, request: &PageRequest) -> Result<Page<T>, Error>
where
	T: Sortable + Send,
	S: PageSource<T> + ?Sized,
{
	let sort = request.sort::<T>()?;
	let window = request.window();
	let total = source.count().await?;

	let content = if window.offset >= total {
		Vec::new()
	} else {
		source.fetch(sort, window).await?
	};

	Ok(Page::new(content, request, total))
}

/// Orders `records` and cuts `window` out of them.
pub fn apply<T: Sortable>(mut records: Vec<T>, sort: Sort<T::Field>, window: Window) -> Vec<T> {
	records.sort_by(|a, b| {
		sort.direction
			.apply(a.compare_by(b, sort.field))
			.then_with(|| a.id().cmp(&b.id()))
	});

	let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
	let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);

	records.into_iter().skip(offset).take(limit).collect()
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::entity::Post;

	fn post(id: i64, title: &str) -> Post {
		Post {
			id,
			title: title.into(),
			description: String::new(),
			content: String::new(),
			category_id: 1,
		}
	}

	fn request(page_no: u32, page_size: u32) -> PageRequest {
		PageRequest::new(page_no, page_size, "id", Direction::Asc).unwrap()
	}

	#[test]
	fn test_page_metadata() {
		let page = Page::new(vec![(); 5], &request(2, 10), 25);

		assert_eq!(page.total_pages, 3);
		assert_eq!(page.total_elements, 25);
		assert_eq!(page.page_no, 2);
		assert_eq!(page.page_size, 10);
		assert!(page.last);

		let page = Page::new(vec![(); 10], &request(1, 10), 25);

		assert!(!page.last);
	}

	#[test]
	fn test_empty_collection_is_last() {
		let page = Page::<()>::new(Vec::new(), &request(0, 10), 0);

		assert_eq!(page.total_pages, 0);
		assert!(page.last);
	}

	#[test]
	fn test_window_offset() {
		assert_eq!(request(0, 10).window(), Window { offset: 0, limit: 10 });
		assert_eq!(request(3, 7).window(), Window { offset: 21, limit: 7 });
		assert_eq!(
			request(u32::MAX, u32::MAX).window().offset,
			u64::from(u32::MAX) * u64::from(u32::MAX)
		);
	}

	#[test]
	fn test_zero_page_size_is_rejected() {
		let result = PageRequest::new(0, 0, "id", Direction::Asc);

		assert!(matches!(
			result,
			Err(Error::ValidationFailed { field: "pageSize", .. })
		));
	}

	#[test]
	fn test_default_request() {
		let request = PageRequest::default();

		assert_eq!(request.page_no, 0);
		assert_eq!(request.page_size.get(), 10);
		assert_eq!(request.sort_by, "id");
		assert_eq!(request.sort_dir, Direction::Asc);
	}

	#[test]
	fn test_unknown_sort_field() {
		let request = PageRequest::new(0, 10, "password", Direction::Asc).unwrap();

		assert!(matches!(
			request.sort::<Post>(),
			Err(Error::InvalidSort { field }) if field == "password"
		));
	}

	#[test]
	fn test_content_length_matches_window() {
		for total in 0..30_i64 {
			let records = (1..=total).map(|id| post(id, "t")).collect::<Vec<_>>();

			for size in 1..8_u32 {
				for page_no in 0..12_u32 {
					let request = request(page_no, size);
					let sort = request.sort::<Post>().unwrap();
					let content = apply(records.clone(), sort, request.window());
					let page = Page::new(content, &request, records.len() as u64);

					let expected = i64::from(size)
						.min((total - i64::from(page_no) * i64::from(size)).max(0));

					assert_eq!(page.content.len() as i64, expected);

					if u64::from(page_no) >= page.total_pages {
						assert!(page.content.is_empty());
						assert!(page.last);
					}
				}
			}
		}
	}

	#[test]
	fn test_ties_are_broken_by_id() {
		let records = vec![post(3, "b"), post(1, "b"), post(2, "a"), post(4, "b")];
		let request = PageRequest::new(0, 10, "title", Direction::Desc).unwrap();
		let sort = request.sort::<Post>().unwrap();

		let ids = apply(records, sort, request.window())
			.into_iter()
			.map(|post| post.id)
			.collect::<Vec<_>>();

		assert_eq!(ids, [1, 3, 4, 2]);
	}

	#[test]
	fn test_text_is_ordered_bytewise() {
		let records = vec![post(1, "b"), post(2, "B"), post(3, "a"), post(4, "A")];
		let request = PageRequest::new(0, 10, "title", Direction::Asc).unwrap();
		let sort = request.sort::<Post>().unwrap();

		let titles = apply(records, sort, request.window())
			.into_iter()
			.map(|post| post.title)
			.collect::<Vec<_>>();

		assert_eq!(titles, ["A", "B", "a", "b"]);
	}

	#[test]
	fn test_direction_parsing() {
		assert_eq!("ASC".parse::<Direction>().unwrap(), Direction::Asc);
		assert_eq!("descending".parse::<Direction>().unwrap(), Direction::Desc);
		assert!("sideways".parse::<Direction>().is_err());

		let direction: Direction = serde_json::from_str("\"Desc\"").unwrap();

		assert_eq!(direction, Direction::Desc);
	}
}
