use aide::axum::{routing::get_with, ApiRouter};

use crate::AppState;

pub mod model;
pub mod route;

/// Comment routes, relative to the posts they belong to.
pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/:post_id/comments",
			get_with(get_comments, get_comments_docs).post_with(create_comment, create_comment_docs),
		)
		.api_route(
			"/:post_id/comments/:comment_id",
			get_with(get_comment, get_comment_docs)
				.put_with(update_comment, update_comment_docs)
				.delete_with(delete_comment, delete_comment_docs),
		)
}

#[cfg(test)]
mod test {
	use axum::http::StatusCode;

	use crate::test::*;

	#[tokio::test]
	async fn test_comment_lifecycle() {
		let (server, store) = server();
		let category = seed_category(&store, "Tech").await;
		let post = seed_post(&store, "Hello", category.id).await;
		let path = format!("/api/v1/posts/{}/comments", post.id);

		let response = server
			.post(&path)
			.json(&json!({
				"name": "Ada",
				"email": "ada@example.com",
				"body": "Nice post",
				"postId": 42,
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::CREATED);

		let comment = response.json::<Value>();

		assert_eq!(comment["postId"], post.id);
		assert_eq!(comment["name"], "Ada");

		let item = format!("{path}/{}", comment["id"]);
		let response = server
			.put(&item)
			.json(&json!({
				"name": "Ada L.",
				"email": "ada@example.com",
				"body": "Great post",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert_eq!(response.json::<Value>()["body"], "Great post");
		assert_eq!(server.get(&path).await.json::<Value>()[0]["name"], "Ada L.");

		let response = server.delete(&item).await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert_eq!(response.json::<String>(), "Comment deleted successfully.");
		assert_eq!(server.get(&item).await.status_code(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_comment_of_another_post() {
		let (server, store) = server();
		let category = seed_category(&store, "Tech").await;
		let first = seed_post(&store, "A", category.id).await;
		let second = seed_post(&store, "B", category.id).await;

		server
			.post(&format!("/api/v1/posts/{}/comments", first.id))
			.json(&json!({
				"name": "Ada",
				"email": "ada@example.com",
				"body": "Nice post",
			}))
			.await;

		let response = server
			.get(&format!("/api/v1/posts/{}/comments/1", second.id))
			.await;

		assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			response.json::<Value>()["errors"][0]["content"],
			"Comment does not belong to post"
		);
	}

	#[tokio::test]
	async fn test_comments_of_unknown_post() {
		let (server, _) = server();

		let response = server.get("/api/v1/posts/9/comments").await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert_eq!(response.json::<Value>(), json!([]));

		let response = server
			.post("/api/v1/posts/9/comments")
			.json(&json!({
				"name": "Ada",
				"email": "ada@example.com",
				"body": "Nice post",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn test_invalid_email() {
		let (server, store) = server();
		let category = seed_category(&store, "Tech").await;
		let post = seed_post(&store, "A", category.id).await;

		let response = server
			.post(&format!("/api/v1/posts/{}/comments", post.id))
			.json(&json!({
				"name": "Ada",
				"email": "not an email",
				"body": "Nice post",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	}
}
