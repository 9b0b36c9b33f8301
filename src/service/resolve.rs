//! Lookup by primary key.
//!
//! Every service resolves entities through here, so a missing record always
//! surfaces as the same [`Error::NotFound`] shape whatever its kind.

use std::sync::Arc;

use super::Error;
use crate::{
	entity::{Category, Comment, Entity, Post},
	store::Store,
};

/// Turns the result of a by-id lookup into the entity or a `NotFound` error.
pub fn require<E: Entity>(record: Option<E>, id: i64) -> Result<E, Error> {
	record.ok_or(Error::NotFound {
		kind: E::KIND,
		field: "id",
		value: id,
	})
}

#[derive(Clone)]
pub struct Resolver {
	store: Arc<dyn Store>,
}

impl Resolver {
	pub fn new(store: Arc<dyn Store>) -> Self {
		Self { store }
	}

	pub async fn category(&self, id: i64) -> Result<Category, Error> {
		require(self.store.find_category(id).await?, id)
	}

	pub async fn post(&self, id: i64) -> Result<Post, Error> {
		require(self.store.find_post(id).await?, id)
	}

	pub async fn comment(&self, id: i64) -> Result<Comment, Error> {
		require(self.store.find_comment(id).await?, id)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		entity::{EntityKind, NewCategory},
		store::{memory::MemoryStore, CategoryStore},
	};

	#[test]
	fn test_require_names_the_kind() {
		let error = require::<Comment>(None, 7).unwrap_err();

		assert!(matches!(
			error,
			Error::NotFound {
				kind: EntityKind::Comment,
				field: "id",
				value: 7
			}
		));
		assert_eq!(error.to_string(), "Comment not found with id : 7");
	}

	#[tokio::test]
	async fn test_resolves_existing_records() {
		let store = Arc::new(MemoryStore::default());
		let category = store
			.insert_category(NewCategory {
				name: "Tech".into(),
				description: String::new(),
			})
			.await
			.unwrap();

		let resolver = Resolver::new(store);

		assert_eq!(resolver.category(category.id).await.unwrap(), category);
		assert!(matches!(
			resolver.post(category.id).await,
			Err(Error::NotFound {
				kind: EntityKind::Post,
				..
			})
		));
	}
}
