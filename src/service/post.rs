use std::{cmp::Ordering, sync::Arc};

use super::{
	pagination::{self, Page, PageRequest, Sortable},
	resolve::{require, Resolver},
	Error,
};
use crate::{
	entity,
	route::post::model::{Post, PostInput},
	store::Store,
};

/// The attributes posts can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
	Id,
	Title,
	Description,
	Content,
	CategoryId,
}

impl Sortable for entity::Post {
	type Field = PostField;

	fn sort_field(name: &str) -> Option<PostField> {
		Some(match name {
			"id" => PostField::Id,
			"title" => PostField::Title,
			"description" => PostField::Description,
			"content" => PostField::Content,
			"categoryId" | "category_id" => PostField::CategoryId,
			_ => return None,
		})
	}

	fn compare_by(&self, other: &Self, field: PostField) -> Ordering {
		match field {
			PostField::Id => self.id.cmp(&other.id),
			PostField::Title => self.title.cmp(&other.title),
			PostField::Description => self.description.cmp(&other.description),
			PostField::Content => self.content.cmp(&other.content),
			PostField::CategoryId => self.category_id.cmp(&other.category_id),
		}
	}
}

/// Post CRUD. Every write checks that the referenced category exists.
#[derive(Clone)]
pub struct PostService {
	store: Arc<dyn Store>,
	resolve: Resolver,
}

impl PostService {
	pub fn new(store: Arc<dyn Store>) -> Self {
		Self {
			resolve: Resolver::new(store.clone()),
			store,
		}
	}

	#[tracing::instrument(skip(self, input), fields(category_id = input.category_id))]
	pub async fn create(&self, input: PostInput) -> Result<Post, Error> {
		let category = self.resolve.category(input.category_id).await?;
		let mut post = entity::NewPost::from(input);
		post.category_id = category.id;

		let post = self.store.insert_post(post).await?;

		tracing::info!(post_id = post.id, "created post");
		Ok(post.into())
	}

	#[tracing::instrument(skip(self))]
	pub async fn list(&self, request: &PageRequest) -> Result<Page<Post>, Error> {
		let page = pagination::list_page::<entity::Post, _>(&*self.store, request).await?;

		Ok(page.map(Post::from))
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, id: i64) -> Result<Post, Error> {
		Ok(self.resolve.post(id).await?.into())
	}

	/// Replaces the title, description, content and category of a post.
	#[tracing::instrument(skip(self, input))]
	pub async fn update(&self, input: PostInput, id: i64) -> Result<Post, Error> {
		let mut post = self.resolve.post(id).await?;
		// Checked again even when unchanged: the category may have been deleted.
		let category = self.resolve.category(input.category_id).await?;

		post.title = input.title;
		post.description = input.description;
		post.content = input.content;
		post.category_id = category.id;

		Ok(require(self.store.update_post(&post).await?, id)?.into())
	}

	/// Deletes a post along with its comments.
	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, id: i64) -> Result<(), Error> {
		let post = self.resolve.post(id).await?;

		if !self.store.delete_post(post.id).await? {
			return Err(Error::NotFound {
				kind: entity::EntityKind::Post,
				field: "id",
				value: id,
			});
		}

		tracing::info!(post_id = id, "deleted post");
		Ok(())
	}

	#[tracing::instrument(skip(self))]
	pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Post>, Error> {
		let category = self.resolve.category(category_id).await?;
		let posts = self.store.posts_by_category(category.id).await?;

		Ok(posts.into_iter().map(Post::from).collect())
	}
}
