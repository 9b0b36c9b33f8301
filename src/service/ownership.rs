//! Parent/child integrity for comments.
//!
//! A comment is only ever addressed through the post it belongs to. The only
//! way to obtain an [`Owned`] comment is [`verify`], and every single-comment
//! read or write in [`super::CommentService`] goes through one.

use super::Error;
use crate::entity::Comment;

/// A comment whose owning post has been checked against the request path.
#[derive(Debug)]
pub struct Owned(Comment);

impl Owned {
	pub fn get(&self) -> &Comment {
		&self.0
	}

	pub fn into_inner(self) -> Comment {
		self.0
	}
}

/// Checks that `comment` belongs to `post_id`, the post named by the caller
/// rather than the one stored on the comment.
pub fn verify(comment: Comment, post_id: i64) -> Result<Owned, Error> {
	if comment.post_id != post_id {
		return Err(Error::InvalidRelationship {
			message: "Comment does not belong to post".into(),
		});
	}

	Ok(Owned(comment))
}

#[cfg(test)]
mod test {
	use super::*;

	fn comment(post_id: i64) -> Comment {
		Comment {
			id: 1,
			name: "x".into(),
			email: "x@example.com".into(),
			body: "hello".into(),
			post_id,
		}
	}

	#[test]
	fn test_matching_post() {
		let owned = verify(comment(1), 1).unwrap();

		assert_eq!(owned.get().post_id, 1);
		assert_eq!(owned.into_inner(), comment(1));
	}

	#[test]
	fn test_other_post() {
		let error = verify(comment(1), 2).unwrap_err();

		assert!(matches!(error, Error::InvalidRelationship { .. }));
		assert_eq!(error.to_string(), "Comment does not belong to post");
	}
}
