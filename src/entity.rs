//! Persisted shapes of the three entity kinds.
//!
//! These are what the store reads and writes. The shapes exposed over HTTP
//! live next to their routes and are converted in [`crate::service::mapping`].

use std::fmt;

/// The kind of an entity, used to describe lookups that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
	Category,
	Post,
	Comment,
}

impl EntityKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Category => "Category",
			Self::Post => "Post",
			Self::Comment => "Comment",
		}
	}
}

impl fmt::Display for EntityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A persisted record addressable by its generated identifier.
pub trait Entity {
	const KIND: EntityKind;

	fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
	pub id: i64,
	pub name: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
	pub name: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub description: String,
	pub content: String,
	/// Not a foreign key; checked by the service on every write.
	pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
	pub title: String,
	pub description: String,
	pub content: String,
	pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub body: String,
	pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
	pub name: String,
	pub email: String,
	pub body: String,
	pub post_id: i64,
}

impl Entity for Category {
	const KIND: EntityKind = EntityKind::Category;

	fn id(&self) -> i64 {
		self.id
	}
}

impl Entity for Post {
	const KIND: EntityKind = EntityKind::Post;

	fn id(&self) -> i64 {
		self.id
	}
}

impl Entity for Comment {
	const KIND: EntityKind = EntityKind::Comment;

	fn id(&self) -> i64 {
		self.id
	}
}
