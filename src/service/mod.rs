//! Business rules for posts, comments and categories.
//!
//! Services are cheap to clone and share one [`Store`]. They return the
//! transfer shapes defined next to the routes, and never log or recover from
//! errors: every [`Error`] goes back to the caller unchanged.

use std::borrow::Cow;

use axum::http::StatusCode;

use crate::{entity::EntityKind, error};

pub mod category;
pub mod comment;
pub mod mapping;
pub mod ownership;
pub mod pagination;
pub mod post;
pub mod resolve;

pub use category::CategoryService;
pub use comment::CommentService;
pub use post::PostService;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{kind} not found with {field} : {value}")]
	NotFound {
		kind: EntityKind,
		field: &'static str,
		value: i64,
	},
	#[error("{message}")]
	InvalidRelationship { message: Cow<'static, str> },
	#[error("cannot sort by `{field}`")]
	InvalidSort { field: String },
	#[error("{field}: {reason}")]
	ValidationFailed {
		field: &'static str,
		reason: Cow<'static, str>,
	},
	#[error("storage error: {0}")]
	Storage(#[from] sqlx::Error),
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::NotFound { .. } => StatusCode::NOT_FOUND,
			Self::InvalidRelationship { .. }
			| Self::InvalidSort { .. }
			| Self::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
			Self::Storage(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn errors(&self) -> Vec<error::Message<'_>> {
		match self {
			Self::NotFound { kind, field, value } => error::Message::new(self.to_string())
				.detail("resource", kind.as_str())
				.detail(field, *value)
				.into_vec(),
			Self::InvalidSort { field } => error::Message::new(self.to_string())
				.field("sortBy")
				.detail("sortBy", field.as_str())
				.into_vec(),
			Self::ValidationFailed { field, reason } => error::Message::new(&**reason)
				.field(*field)
				.into_vec(),
			Self::InvalidRelationship { message } => error::Message::new(&**message).into_vec(),
			// Storage details stay in the logs.
			Self::Storage(..) => error::Message::new("internal_error").into_vec(),
		}
	}
}
