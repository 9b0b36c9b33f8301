use std::borrow::Cow;

use aide::{gen::GenContext, openapi, OperationOutput};
use axum::{
	body::Body,
	extract::rejection::{PathRejection, QueryRejection},
	http::{Response, StatusCode},
	response::IntoResponse,
	Json,
};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use tower_governor::GovernorError;

pub type Map = serde_json::Map<String, Value>;

/// A single error sent to the client.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message<'a> {
	/// A human-readable description of what went wrong.
	pub content: Cow<'a, str>,
	/// The request field the error refers to, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub field: Option<Cow<'a, str>>,
	/// Structured data about the error.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Cow<'a, Map>>,
}

impl<'a> Message<'a> {
	pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
		Self {
			content: content.into(),
			field: None,
			details: None,
		}
	}

	#[must_use]
	pub fn field(mut self, field: impl Into<Cow<'a, str>>) -> Self {
		self.field = Some(field.into());
		self
	}

	#[must_use]
	pub fn detail(mut self, key: &str, value: impl Into<Value>) -> Self {
		self.details
			.get_or_insert_with(|| Cow::Owned(Map::new()))
			.to_mut()
			.insert(key.into(), value.into());
		self
	}

	pub fn into_vec(self) -> Vec<Self> {
		vec![self]
	}
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
	pub success: bool,
	pub errors: Vec<Message<'a>>,
}

/// An error that knows how it is presented to the client.
///
/// The [`Display`](std::fmt::Display) output is only logged, so it can contain
/// details that [`ErrorShape::errors`] leaves out.
pub trait ErrorShape: std::error::Error {
	fn status(&self) -> StatusCode;

	fn errors(&self) -> Vec<Message<'_>>;
}

/// Wraps an [`ErrorShape`] so it can be returned from a handler.
#[derive(Debug)]
pub struct RouteError<T>(pub T);

impl<T: ErrorShape> From<T> for RouteError<T> {
	fn from(error: T) -> Self {
		Self(error)
	}
}

impl<T: ErrorShape> IntoResponse for RouteError<T> {
	fn into_response(self) -> Response<Body> {
		let status = self.0.status();

		if status.is_server_error() {
			tracing::error!(error = %self.0, "request failed");
		} else {
			tracing::debug!(error = %self.0, %status, "request rejected");
		}

		(
			status,
			Json(ErrorResponse {
				success: false,
				errors: self.0.errors(),
			}),
		)
			.into_response()
	}
}

impl<T> OperationOutput for RouteError<T> {
	type Inner = ErrorResponse<'static>;

	fn operation_response(
		ctx: &mut GenContext,
		operation: &mut openapi::Operation,
	) -> Option<openapi::Response> {
		Json::<ErrorResponse<'static>>::operation_response(ctx, operation)
	}
}

/// Errors raised before a request reaches a handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("invalid json body")]
	Json(axum_jsonschema::JsonSchemaRejection),
	#[error("query error: {0}")]
	Query(#[from] QueryRejection),
	#[error("path error: {0}")]
	Path(#[from] PathRejection),
	#[error("rate limited")]
	RateLimit(GovernorError),
}

impl From<axum_jsonschema::JsonSchemaRejection> for AppError {
	fn from(rejection: axum_jsonschema::JsonSchemaRejection) -> Self {
		Self::Json(rejection)
	}
}

impl From<GovernorError> for AppError {
	fn from(error: GovernorError) -> Self {
		Self::RateLimit(error)
	}
}

impl ErrorShape for AppError {
	fn status(&self) -> StatusCode {
		match self {
			Self::Validation(..) | Self::Json(..) => StatusCode::BAD_REQUEST,
			Self::Query(rejection) => rejection.status(),
			Self::Path(rejection) => rejection.status(),
			Self::RateLimit(GovernorError::TooManyRequests { .. }) => StatusCode::TOO_MANY_REQUESTS,
			Self::RateLimit(GovernorError::UnableToExtractKey) => StatusCode::INTERNAL_SERVER_ERROR,
			Self::RateLimit(GovernorError::Other { code, .. }) => *code,
		}
	}

	fn errors(&self) -> Vec<Message<'_>> {
		match self {
			Self::Validation(errors) => errors
				.field_errors()
				.into_iter()
				.flat_map(|(field, errors)| {
					let field = field.to_string();

					errors.iter().map(move |error| {
						let content = error.message.as_ref().unwrap_or(&error.code);
						let message = Message::new(&**content).field(field.clone());

						error
							.params
							.iter()
							.filter(|(key, _)| **key != "value")
							.fold(message, |message, (key, value)| {
								message.detail(key, value.clone())
							})
					})
				})
				.collect(),
			Self::Json(..) => Message::new("invalid_body").into_vec(),
			Self::Query(rejection) => Message::new(rejection.body_text()).into_vec(),
			Self::Path(rejection) => Message::new(rejection.body_text()).into_vec(),
			Self::RateLimit(GovernorError::TooManyRequests { wait_time, .. }) => {
				Message::new("too_many_requests")
					.detail("waitTime", *wait_time)
					.into_vec()
			}
			Self::RateLimit(GovernorError::Other { msg, .. }) => {
				Message::new(msg.as_deref().unwrap_or("rate_limit_error")).into_vec()
			}
			Self::RateLimit(GovernorError::UnableToExtractKey) => {
				Message::new("internal_error").into_vec()
			}
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		let headers = match self {
			// Schema failures carry their own detailed body.
			Self::Json(rejection) => return rejection.into_response(),
			Self::RateLimit(
				GovernorError::TooManyRequests { ref headers, .. }
				| GovernorError::Other { ref headers, .. },
			) => headers.clone(),
			_ => None,
		};

		let mut response = RouteError(self).into_response();

		if let Some(headers) = headers {
			response.headers_mut().extend(headers);
		}

		response
	}
}

impl OperationOutput for AppError {
	type Inner = ErrorResponse<'static>;

	fn operation_response(
		ctx: &mut GenContext,
		operation: &mut openapi::Operation,
	) -> Option<openapi::Response> {
		RouteError::<Self>::operation_response(ctx, operation)
	}
}
