//! Persistence seam.
//!
//! The services only see [`Store`]. [`postgres::PgStore`] is the production
//! implementation; tests run against the in-memory one.

use async_trait::async_trait;

use crate::{
	entity::{Category, Comment, NewCategory, NewComment, NewPost, Post},
	service::pagination::PageSource,
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

pub type Result<T> = std::result::Result<T, sqlx::Error>;

#[async_trait]
pub trait CategoryStore: Send + Sync {
	async fn find_category(&self, id: i64) -> Result<Option<Category>>;
	/// All categories, ordered by id.
	async fn list_categories(&self) -> Result<Vec<Category>>;
	async fn insert_category(&self, category: NewCategory) -> Result<Category>;
	/// `None` when the row no longer exists.
	async fn update_category(&self, category: &Category) -> Result<Option<Category>>;
	/// Returns whether a row was removed. Posts of the category are left alone.
	async fn delete_category(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait PostStore: PageSource<Post> + Send + Sync {
	async fn find_post(&self, id: i64) -> Result<Option<Post>>;
	/// All posts referencing `category_id`, ordered by id.
	async fn posts_by_category(&self, category_id: i64) -> Result<Vec<Post>>;
	async fn insert_post(&self, post: NewPost) -> Result<Post>;
	async fn update_post(&self, post: &Post) -> Result<Option<Post>>;
	/// Returns whether a row was removed. Comments of the post go with it.
	async fn delete_post(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
	async fn find_comment(&self, id: i64) -> Result<Option<Comment>>;
	/// All comments referencing `post_id`, ordered by id.
	async fn comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>>;
	async fn insert_comment(&self, comment: NewComment) -> Result<Comment>;
	async fn update_comment(&self, comment: &Comment) -> Result<Option<Comment>>;
	async fn delete_comment(&self, id: i64) -> Result<bool>;
}

/// Everything the services need from persistence.
pub trait Store: CategoryStore + PostStore + CommentStore {}

impl<T> Store for T where T: CategoryStore + PostStore + CommentStore {}
