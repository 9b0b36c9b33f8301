//! Conversions between persisted entities and the shapes sent over HTTP.
//!
//! Every conversion copies fields one by one; nothing here validates or
//! touches the store.

use crate::{
	entity,
	route::{category::model as category, comment::model as comment, post::model as post},
};

impl From<entity::Post> for post::Post {
	fn from(post: entity::Post) -> Self {
		Self {
			id: post.id,
			title: post.title,
			description: post.description,
			content: post.content,
			category_id: post.category_id,
		}
	}
}

impl From<post::Post> for entity::Post {
	fn from(post: post::Post) -> Self {
		Self {
			id: post.id,
			title: post.title,
			description: post.description,
			content: post.content,
			category_id: post.category_id,
		}
	}
}

impl From<post::PostInput> for entity::NewPost {
	fn from(input: post::PostInput) -> Self {
		Self {
			title: input.title,
			description: input.description,
			content: input.content,
			category_id: input.category_id,
		}
	}
}

impl From<entity::Comment> for comment::Comment {
	fn from(comment: entity::Comment) -> Self {
		Self {
			id: comment.id,
			name: comment.name,
			email: comment.email,
			body: comment.body,
			post_id: comment.post_id,
		}
	}
}

impl From<comment::Comment> for entity::Comment {
	fn from(comment: comment::Comment) -> Self {
		Self {
			id: comment.id,
			name: comment.name,
			email: comment.email,
			body: comment.body,
			post_id: comment.post_id,
		}
	}
}

impl entity::NewComment {
	/// A new comment under `post`. The input carries no post reference of its own.
	pub fn new(input: comment::CommentInput, post: &entity::Post) -> Self {
		Self {
			name: input.name,
			email: input.email,
			body: input.body,
			post_id: post.id,
		}
	}
}

impl From<entity::Category> for category::Category {
	fn from(category: entity::Category) -> Self {
		Self {
			id: category.id,
			name: category.name,
			description: category.description,
		}
	}
}

impl From<category::Category> for entity::Category {
	fn from(category: category::Category) -> Self {
		Self {
			id: category.id,
			name: category.name,
			description: category.description,
		}
	}
}

impl From<category::CategoryInput> for entity::NewCategory {
	fn from(input: category::CategoryInput) -> Self {
		Self {
			name: input.name,
			description: input.description,
		}
	}
}
