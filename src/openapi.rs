use aide::{
	openapi::{ApiKeyLocation, SecurityScheme, Tag},
	transform::TransformOpenApi,
};
use axum::http::header;

use crate::{error, extract::Json};

pub const SECURITY_SCHEME_ADMIN: &str = "Admin Token";

pub mod tag {
	pub const POST: &str = "Post";
	pub const COMMENT: &str = "Comment";
	pub const CATEGORY: &str = "Category";
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Blog Service Open API")
		.summary("Posts, comments and categories for a blog")
		.description(include_str!("../README.md"))
		.tag(Tag {
			name: tag::POST.into(),
			description: Some("Post management".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::COMMENT.into(),
			description: Some("Comments under a post".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::CATEGORY.into(),
			description: Some("Category management".into()),
			..Default::default()
		})
		.security_scheme(
			SECURITY_SCHEME_ADMIN,
			SecurityScheme::ApiKey {
				location: ApiKeyLocation::Header,
				name: header::AUTHORIZATION.as_str().into(),
				description: Some("An admin token, sent as `Bearer <token>`".into()),
				extensions: Default::default(),
			},
		)
		.default_response_with::<Json<error::ErrorResponse<'static>>, _>(|res| {
			res.example(error::ErrorResponse {
				success: false,
				errors: error::Message::new("error message")
					.field("optional field")
					.detail("key", "value")
					.into_vec(),
			})
		})
}
