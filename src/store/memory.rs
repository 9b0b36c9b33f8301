use std::{
	collections::BTreeMap,
	sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use super::{CategoryStore, CommentStore, PostStore, Result};
use crate::{
	entity::{Category, Comment, NewCategory, NewComment, NewPost, Post},
	service::{
		pagination::{self, PageSource, Sort, Window},
		post::PostField,
	},
};

#[derive(Default)]
struct Tables {
	categories: BTreeMap<i64, Category>,
	posts: BTreeMap<i64, Post>,
	comments: BTreeMap<i64, Comment>,
	category_seq: i64,
	post_seq: i64,
	comment_seq: i64,
}

fn next(sequence: &mut i64) -> i64 {
	*sequence += 1;
	*sequence
}

/// An in-memory [`super::Store`] with the same semantics as the PostgreSQL
/// schema, including the comment cascade.
///
/// Identifiers come from one sequence per table and are never reused, like
/// `BIGSERIAL`.
#[derive(Default)]
pub struct MemoryStore {
	tables: Mutex<Tables>,
}

impl MemoryStore {
	fn tables(&self) -> MutexGuard<'_, Tables> {
		self.tables.lock().unwrap()
	}
}

#[async_trait]
impl CategoryStore for MemoryStore {
	async fn find_category(&self, id: i64) -> Result<Option<Category>> {
		Ok(self.tables().categories.get(&id).cloned())
	}

	async fn list_categories(&self) -> Result<Vec<Category>> {
		Ok(self.tables().categories.values().cloned().collect())
	}

	async fn insert_category(&self, category: NewCategory) -> Result<Category> {
		let mut tables = self.tables();
		let category = Category {
			id: next(&mut tables.category_seq),
			name: category.name,
			description: category.description,
		};

		tables.categories.insert(category.id, category.clone());
		Ok(category)
	}

	async fn update_category(&self, category: &Category) -> Result<Option<Category>> {
		let mut tables = self.tables();
		let Some(stored) = tables.categories.get_mut(&category.id) else {
			return Ok(None);
		};

		stored.clone_from(category);
		Ok(Some(stored.clone()))
	}

	async fn delete_category(&self, id: i64) -> Result<bool> {
		Ok(self.tables().categories.remove(&id).is_some())
	}
}

#[async_trait]
impl PageSource<Post> for MemoryStore {
	async fn count(&self) -> Result<u64> {
		Ok(self.tables().posts.len() as u64)
	}

	async fn fetch(&self, sort: Sort<PostField>, window: Window) -> Result<Vec<Post>> {
		let posts = self.tables().posts.values().cloned().collect();

		Ok(pagination::apply(posts, sort, window))
	}
}

#[async_trait]
impl PostStore for MemoryStore {
	async fn find_post(&self, id: i64) -> Result<Option<Post>> {
		Ok(self.tables().posts.get(&id).cloned())
	}

	async fn posts_by_category(&self, category_id: i64) -> Result<Vec<Post>> {
		Ok(self
			.tables()
			.posts
			.values()
			.filter(|post| post.category_id == category_id)
			.cloned()
			.collect())
	}

	async fn insert_post(&self, post: NewPost) -> Result<Post> {
		let mut tables = self.tables();
		let post = Post {
			id: next(&mut tables.post_seq),
			title: post.title,
			description: post.description,
			content: post.content,
			category_id: post.category_id,
		};

		tables.posts.insert(post.id, post.clone());
		Ok(post)
	}

	async fn update_post(&self, post: &Post) -> Result<Option<Post>> {
		let mut tables = self.tables();
		let Some(stored) = tables.posts.get_mut(&post.id) else {
			return Ok(None);
		};

		stored.clone_from(post);
		Ok(Some(stored.clone()))
	}

	async fn delete_post(&self, id: i64) -> Result<bool> {
		let mut tables = self.tables();

		if tables.posts.remove(&id).is_none() {
			return Ok(false);
		}

		tables.comments.retain(|_, comment| comment.post_id != id);
		Ok(true)
	}
}

#[async_trait]
impl CommentStore for MemoryStore {
	async fn find_comment(&self, id: i64) -> Result<Option<Comment>> {
		Ok(self.tables().comments.get(&id).cloned())
	}

	async fn comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
		Ok(self
			.tables()
			.comments
			.values()
			.filter(|comment| comment.post_id == post_id)
			.cloned()
			.collect())
	}

	async fn insert_comment(&self, comment: NewComment) -> Result<Comment> {
		let mut tables = self.tables();

		// comment.post_id is a real foreign key
		if !tables.posts.contains_key(&comment.post_id) {
			return Err(sqlx::Error::RowNotFound);
		}

		let comment = Comment {
			id: next(&mut tables.comment_seq),
			name: comment.name,
			email: comment.email,
			body: comment.body,
			post_id: comment.post_id,
		};

		tables.comments.insert(comment.id, comment.clone());
		Ok(comment)
	}

	async fn update_comment(&self, comment: &Comment) -> Result<Option<Comment>> {
		let mut tables = self.tables();
		let Some(stored) = tables.comments.get_mut(&comment.id) else {
			return Ok(None);
		};

		stored.clone_from(comment);
		Ok(Some(stored.clone()))
	}

	async fn delete_comment(&self, id: i64) -> Result<bool> {
		Ok(self.tables().comments.remove(&id).is_some())
	}
}
