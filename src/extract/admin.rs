use std::sync::Arc;

use aide::OperationInput;
use axum::{
	extract::{FromRef, FromRequestParts},
	http::{header, request, StatusCode},
};

use crate::{
	error::{self, RouteError},
	openapi::SECURITY_SCHEME_ADMIN,
};

pub const AUTHORIZATION_PREFIX: &str = "Bearer ";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("missing_token")]
	MissingToken,
	#[error("invalid_token")]
	InvalidToken,
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		StatusCode::UNAUTHORIZED
	}

	fn errors(&self) -> Vec<error::Message<'_>> {
		error::Message::new(self.to_string()).into_vec()
	}
}

/// The bearer tokens allowed to manage posts and categories.
#[derive(Clone, Debug, Default)]
pub struct AdminTokens(Arc<[String]>);

impl AdminTokens {
	pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
		Self(tokens.into_iter().filter(|token| !token.is_empty()).collect())
	}

	pub fn contains(&self, token: &str) -> bool {
		self.0.iter().any(|known| known == token)
	}
}

/// Proof that the request carries an admin token.
///
/// ```rust
/// async fn route(_: Admin, Json(post): Json<PostInput>) {
///   // ...
/// }
/// ```
#[derive(Debug)]
pub struct Admin;

#[axum::async_trait]
impl<S> FromRequestParts<S> for Admin
where
	AdminTokens: FromRef<S>,
	S: Sync + Send,
{
	type Rejection = RouteError<Error>;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let header = parts
			.headers
			.get(header::AUTHORIZATION)
			.ok_or(Error::MissingToken)?;

		let token = header
			.to_str()
			.ok()
			.and_then(|value| value.strip_prefix(AUTHORIZATION_PREFIX))
			.ok_or(Error::InvalidToken)?;

		if !AdminTokens::from_ref(state).contains(token) {
			return Err(Error::InvalidToken.into());
		}

		Ok(Admin)
	}
}

impl OperationInput for Admin {
	/// Adds the admin token requirement to the `OpenAPI` operation.
	fn operation_input(_ctx: &mut aide::gen::GenContext, operation: &mut aide::openapi::Operation) {
		operation.security.push(
			[(SECURITY_SCHEME_ADMIN.to_string(), Vec::new())]
				.into_iter()
				.collect(),
		);
	}
}
