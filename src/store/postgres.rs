use async_trait::async_trait;

use super::{CategoryStore, CommentStore, PostStore, Result};
use crate::{
	entity::{Category, Comment, NewCategory, NewComment, NewPost, Post},
	service::{
		pagination::{PageSource, Sort, Window},
		post::PostField,
	},
	Database,
};

const CATEGORY_COLUMNS: &str = "id, name, description";
const POST_COLUMNS: &str = "id, title, description, content, category_id";
const COMMENT_COLUMNS: &str = "id, name, email, body, post_id";

/// A [`super::Store`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
	database: Database,
}

impl PgStore {
	pub fn new(database: Database) -> Self {
		Self { database }
	}
}

impl PostField {
	/// The `ORDER BY` key for this field. Only these expressions ever reach
	/// the query. Text compares bytewise, as `str` does, whatever the
	/// database collation.
	pub fn sort_key(self) -> &'static str {
		match self {
			Self::Id => "id",
			Self::Title => r#"title COLLATE "C""#,
			Self::Description => r#"description COLLATE "C""#,
			Self::Content => r#"content COLLATE "C""#,
			Self::CategoryId => "category_id",
		}
	}
}

#[async_trait]
impl CategoryStore for PgStore {
	async fn find_category(&self, id: i64) -> Result<Option<Category>> {
		sqlx::query_as(&format!(
			"SELECT {CATEGORY_COLUMNS} FROM category WHERE id = $1"
		))
		.bind(id)
		.fetch_optional(&self.database)
		.await
	}

	async fn list_categories(&self) -> Result<Vec<Category>> {
		sqlx::query_as(&format!(
			"SELECT {CATEGORY_COLUMNS} FROM category ORDER BY id"
		))
		.fetch_all(&self.database)
		.await
	}

	async fn insert_category(&self, category: NewCategory) -> Result<Category> {
		sqlx::query_as(&format!(
			"INSERT INTO category (name, description) VALUES ($1, $2) RETURNING {CATEGORY_COLUMNS}"
		))
		.bind(category.name)
		.bind(category.description)
		.fetch_one(&self.database)
		.await
	}

	async fn update_category(&self, category: &Category) -> Result<Option<Category>> {
		sqlx::query_as(&format!(
			"UPDATE category SET name = $1, description = $2 WHERE id = $3 RETURNING {CATEGORY_COLUMNS}"
		))
		.bind(&category.name)
		.bind(&category.description)
		.bind(category.id)
		.fetch_optional(&self.database)
		.await
	}

	async fn delete_category(&self, id: i64) -> Result<bool> {
		let status = sqlx::query("DELETE FROM category WHERE id = $1")
			.bind(id)
			.execute(&self.database)
			.await?;

		Ok(status.rows_affected() > 0)
	}
}

#[async_trait]
impl PageSource<Post> for PgStore {
	async fn count(&self) -> Result<u64> {
		let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post")
			.fetch_one(&self.database)
			.await?;

		Ok(u64::try_from(count).unwrap_or_default())
	}

	async fn fetch(&self, sort: Sort<PostField>, window: Window) -> Result<Vec<Post>> {
		let query = format!(
			"SELECT {POST_COLUMNS} FROM post ORDER BY {} {}, id ASC LIMIT $1 OFFSET $2",
			sort.field.sort_key(),
			sort.direction.as_sql(),
		);

		sqlx::query_as(&query)
			.bind(i64::from(window.limit))
			.bind(i64::try_from(window.offset).unwrap_or(i64::MAX))
			.fetch_all(&self.database)
			.await
	}
}

#[async_trait]
impl PostStore for PgStore {
	async fn find_post(&self, id: i64) -> Result<Option<Post>> {
		sqlx::query_as(&format!("SELECT {POST_COLUMNS} FROM post WHERE id = $1"))
			.bind(id)
			.fetch_optional(&self.database)
			.await
	}

	async fn posts_by_category(&self, category_id: i64) -> Result<Vec<Post>> {
		sqlx::query_as(&format!(
			"SELECT {POST_COLUMNS} FROM post WHERE category_id = $1 ORDER BY id"
		))
		.bind(category_id)
		.fetch_all(&self.database)
		.await
	}

	async fn insert_post(&self, post: NewPost) -> Result<Post> {
		sqlx::query_as(&format!(
			r#"
				INSERT INTO post (title, description, content, category_id)
				VALUES ($1, $2, $3, $4)
				RETURNING {POST_COLUMNS}
			"#
		))
		.bind(post.title)
		.bind(post.description)
		.bind(post.content)
		.bind(post.category_id)
		.fetch_one(&self.database)
		.await
	}

	async fn update_post(&self, post: &Post) -> Result<Option<Post>> {
		sqlx::query_as(&format!(
			r#"
				UPDATE post
				SET title = $1, description = $2, content = $3, category_id = $4
				WHERE id = $5
				RETURNING {POST_COLUMNS}
			"#
		))
		.bind(&post.title)
		.bind(&post.description)
		.bind(&post.content)
		.bind(post.category_id)
		.bind(post.id)
		.fetch_optional(&self.database)
		.await
	}

	async fn delete_post(&self, id: i64) -> Result<bool> {
		// comment.post_id cascades
		let status = sqlx::query("DELETE FROM post WHERE id = $1")
			.bind(id)
			.execute(&self.database)
			.await?;

		Ok(status.rows_affected() > 0)
	}
}

#[async_trait]
impl CommentStore for PgStore {
	async fn find_comment(&self, id: i64) -> Result<Option<Comment>> {
		sqlx::query_as(&format!(
			"SELECT {COMMENT_COLUMNS} FROM comment WHERE id = $1"
		))
		.bind(id)
		.fetch_optional(&self.database)
		.await
	}

	async fn comments_by_post(&self, post_id: i64) -> Result<Vec<Comment>> {
		sqlx::query_as(&format!(
			"SELECT {COMMENT_COLUMNS} FROM comment WHERE post_id = $1 ORDER BY id"
		))
		.bind(post_id)
		.fetch_all(&self.database)
		.await
	}

	async fn insert_comment(&self, comment: NewComment) -> Result<Comment> {
		sqlx::query_as(&format!(
			r#"
				INSERT INTO comment (name, email, body, post_id)
				VALUES ($1, $2, $3, $4)
				RETURNING {COMMENT_COLUMNS}
			"#
		))
		.bind(comment.name)
		.bind(comment.email)
		.bind(comment.body)
		.bind(comment.post_id)
		.fetch_one(&self.database)
		.await
	}

	async fn update_comment(&self, comment: &Comment) -> Result<Option<Comment>> {
		sqlx::query_as(&format!(
			r#"
				UPDATE comment
				SET name = $1, email = $2, body = $3
				WHERE id = $4
				RETURNING {COMMENT_COLUMNS}
			"#
		))
		.bind(&comment.name)
		.bind(&comment.email)
		.bind(&comment.body)
		.bind(comment.id)
		.fetch_optional(&self.database)
		.await
	}

	async fn delete_comment(&self, id: i64) -> Result<bool> {
		let status = sqlx::query("DELETE FROM comment WHERE id = $1")
			.bind(id)
			.execute(&self.database)
			.await?;

		Ok(status.rows_affected() > 0)
	}
}
