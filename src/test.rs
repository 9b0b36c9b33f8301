//! Shared helpers for tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header, HeaderValue};
use axum_test::{TestRequest, TestServer};

pub use serde_json::{json, Value};

use crate::{
	app,
	entity::{self, Category, Comment, EntityKind, NewCategory, NewComment, NewPost, Post},
	extract::AdminTokens,
	route::comment::model::CommentInput,
	service::{
		pagination::{PageSource, Sort, Window},
		post::PostField,
	},
	store::{self, memory::MemoryStore, CategoryStore, CommentStore, PostStore, Store},
	State,
};

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// A server over the full router, backed by a fresh in-memory store that
/// the caller can also seed directly.
pub fn server() -> (TestServer, Arc<dyn Store>) {
	let store: Arc<dyn Store> = Arc::new(MemoryStore::default());
	let state = State::new(store.clone(), AdminTokens::new([ADMIN_TOKEN.to_string()]));

	(TestServer::new(app(state)).unwrap(), store)
}

pub trait AsAdmin {
	fn as_admin(self) -> Self;
}

impl AsAdmin for TestRequest {
	fn as_admin(self) -> Self {
		self.add_header(
			header::AUTHORIZATION,
			HeaderValue::from_static("Bearer test-admin-token"),
		)
	}
}

pub async fn seed_category(store: &Arc<dyn Store>, name: &str) -> entity::Category {
	store
		.insert_category(entity::NewCategory {
			name: name.into(),
			description: String::new(),
		})
		.await
		.unwrap()
}

pub async fn seed_post(store: &Arc<dyn Store>, title: &str, category_id: i64) -> entity::Post {
	store
		.insert_post(entity::NewPost {
			title: title.into(),
			description: String::new(),
			content: format!("{title} content"),
			category_id,
		})
		.await
		.unwrap()
}

pub fn comment_input(name: &str) -> CommentInput {
	CommentInput {
		name: name.into(),
		email: format!("{name}@example.com"),
		body: "hello".into(),
	}
}

/// Wraps a store so that looking up a record of `kind` returns it and then
/// deletes it, as if another request removed the row right after the read.
pub struct Vanishing {
	store: Arc<dyn Store>,
	kind: EntityKind,
}

impl Vanishing {
	pub fn new(store: Arc<dyn Store>, kind: EntityKind) -> Arc<dyn Store> {
		Arc::new(Self { store, kind })
	}
}

#[async_trait]
impl CategoryStore for Vanishing {
	async fn find_category(&self, id: i64) -> store::Result<Option<Category>> {
		let category = self.store.find_category(id).await?;

		if self.kind == EntityKind::Category {
			self.store.delete_category(id).await?;
		}

		Ok(category)
	}

	async fn list_categories(&self) -> store::Result<Vec<Category>> {
		self.store.list_categories().await
	}

	async fn insert_category(&self, category: NewCategory) -> store::Result<Category> {
		self.store.insert_category(category).await
	}

	async fn update_category(&self, category: &Category) -> store::Result<Option<Category>> {
		self.store.update_category(category).await
	}

	async fn delete_category(&self, id: i64) -> store::Result<bool> {
		self.store.delete_category(id).await
	}
}

#[async_trait]
impl PageSource<Post> for Vanishing {
	async fn count(&self) -> store::Result<u64> {
		self.store.count().await
	}

	async fn fetch(&self, sort: Sort<PostField>, window: Window) -> store::Result<Vec<Post>> {
		self.store.fetch(sort, window).await
	}
}

#[async_trait]
impl PostStore for Vanishing {
	async fn find_post(&self, id: i64) -> store::Result<Option<Post>> {
		let post = self.store.find_post(id).await?;

		if self.kind == EntityKind::Post {
			self.store.delete_post(id).await?;
		}

		Ok(post)
	}

	async fn posts_by_category(&self, category_id: i64) -> store::Result<Vec<Post>> {
		self.store.posts_by_category(category_id).await
	}

	async fn insert_post(&self, post: NewPost) -> store::Result<Post> {
		self.store.insert_post(post).await
	}

	async fn update_post(&self, post: &Post) -> store::Result<Option<Post>> {
		self.store.update_post(post).await
	}

	async fn delete_post(&self, id: i64) -> store::Result<bool> {
		self.store.delete_post(id).await
	}
}

#[async_trait]
impl CommentStore for Vanishing {
	async fn find_comment(&self, id: i64) -> store::Result<Option<Comment>> {
		let comment = self.store.find_comment(id).await?;

		if self.kind == EntityKind::Comment {
			self.store.delete_comment(id).await?;
		}

		Ok(comment)
	}

	async fn comments_by_post(&self, post_id: i64) -> store::Result<Vec<Comment>> {
		self.store.comments_by_post(post_id).await
	}

	async fn insert_comment(&self, comment: NewComment) -> store::Result<Comment> {
		self.store.insert_comment(comment).await
	}

	async fn update_comment(&self, comment: &Comment) -> store::Result<Option<Comment>> {
		self.store.update_comment(comment).await
	}

	async fn delete_comment(&self, id: i64) -> store::Result<bool> {
		self.store.delete_comment(id).await
	}
}
