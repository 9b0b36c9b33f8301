use std::sync::Arc;

use super::{
	resolve::{require, Resolver},
	Error,
};
use crate::{
	entity,
	route::category::model::{Category, CategoryInput},
	store::Store,
};

#[derive(Clone)]
pub struct CategoryService {
	store: Arc<dyn Store>,
	resolve: Resolver,
}

impl CategoryService {
	pub fn new(store: Arc<dyn Store>) -> Self {
		Self {
			resolve: Resolver::new(store.clone()),
			store,
		}
	}

	#[tracing::instrument(skip(self, input))]
	pub async fn create(&self, input: CategoryInput) -> Result<Category, Error> {
		let category = self
			.store
			.insert_category(entity::NewCategory::from(input))
			.await?;

		tracing::info!(category_id = category.id, "created category");
		Ok(category.into())
	}

	#[tracing::instrument(skip(self))]
	pub async fn list(&self) -> Result<Vec<Category>, Error> {
		let categories = self.store.list_categories().await?;

		Ok(categories.into_iter().map(Category::from).collect())
	}

	#[tracing::instrument(skip(self))]
	pub async fn get(&self, id: i64) -> Result<Category, Error> {
		Ok(self.resolve.category(id).await?.into())
	}

	#[tracing::instrument(skip(self, input))]
	pub async fn update(&self, input: CategoryInput, id: i64) -> Result<Category, Error> {
		let mut category = self.resolve.category(id).await?;

		category.name = input.name;
		category.description = input.description;

		Ok(require(self.store.update_category(&category).await?, id)?.into())
	}

	/// Deletes a category. Posts filed under it keep their dangling reference.
	#[tracing::instrument(skip(self))]
	pub async fn delete(&self, id: i64) -> Result<(), Error> {
		if !self.store.delete_category(id).await? {
			return Err(Error::NotFound {
				kind: entity::EntityKind::Category,
				field: "id",
				value: id,
			});
		}

		tracing::info!(category_id = id, "deleted category");
		Ok(())
	}
}
