use std::sync::Arc;

use super::{
	ownership::{self, Owned},
	resolve::{require, Resolver},
	Error,
};
use crate::{
	entity,
	route::comment::model::{Comment, CommentInput},
	store::Store,
};

/// Comment CRUD, always scoped to the post named in the request.
#[derive(Clone)]
pub struct CommentService {
	store: Arc<dyn Store>,
	resolve: Resolver,
}

impl CommentService {
	pub fn new(store: Arc<dyn Store>) -> Self {
		Self {
			resolve: Resolver::new(store.clone()),
			store,
		}
	}

	/// Resolves the post, then the comment, then checks they belong together.
	async fn owned(&self, post_id: i64, comment_id: i64) -> Result<Owned, Error> {
		let post = self.resolve.post(post_id).await?;
		let comment = self.resolve.comment(comment_id).await?;

		ownership::verify(comment, post.id)
	}

	#[tracing::instrument(skip(self, input))]
	pub async fn create(&self, post_id: i64, input: CommentInput) -> Result<Comment, Error> {
		let post = self.resolve.post(post_id).await?;
		let comment = self
			.store
			.insert_comment(entity::NewComment::new(input, &post))
			.await?;

		tracing::info!(comment_id = comment.id, "created comment");
		Ok(comment.into())
	}

	/// Comments of a post in id order. An unknown post simply has none.
	#[tracing::instrument(skip(self))]
	pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, Error> {
		let comments = self.store.comments_by_post(post_id).await?;

		Ok(comments.into_iter().map(Comment::from).collect())
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, post_id: i64, comment_id: i64) -> Result<Comment, Error> {
		Ok(self.owned(post_id, comment_id).await?.into_inner().into())
	}

	/// Replaces the name, email and body of a comment. The owning post never changes.
	#[tracing::instrument(skip(self, input))]
	pub async fn update(
		&self,
		post_id: i64,
		comment_id: i64,
		input: CommentInput,
	) -> Result<Comment, Error> {
		let mut comment = self.owned(post_id, comment_id).await?.into_inner();

		comment.name = input.name;
		comment.email = input.email;
		comment.body = input.body;

		Ok(require(self.store.update_comment(&comment).await?, comment_id)?.into())
	}

	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, post_id: i64, comment_id: i64) -> Result<(), Error> {
		let owned = self.owned(post_id, comment_id).await?;

		if !self.store.delete_comment(owned.get().id).await? {
			return Err(Error::NotFound {
				kind: entity::EntityKind::Comment,
				field: "id",
				value: comment_id,
			});
		}

		tracing::info!(comment_id, "deleted comment");
		Ok(())
	}
}
