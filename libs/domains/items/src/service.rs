//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemDeleted};
use crate::repository::ItemRepository;

/// Maximum number of items returned by `list_items`
pub const LIST_LIMIT: i64 = 1000;

/// Item service providing the CRUD operations
///
/// Every write path validates its payload before touching the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item and echo it back
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: Item) -> ItemResult<Item> {
        input.validate()?;

        self.repository.insert(&input).await?;
        Ok(input)
    }

    /// List up to `LIST_LIMIT` items in store order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.find_all(LIST_LIMIT).await
    }

    /// Get the first item with the given name
    #[instrument(skip(self))]
    pub async fn get_item(&self, name: &str) -> ItemResult<Item> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| ItemError::NotFound(name.to_string()))
    }

    /// Replace description and price of the first item with the given name.
    ///
    /// The `name` carried in `input` is ignored; the record keeps its name.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, name: &str, input: Item) -> ItemResult<Item> {
        input.validate()?;

        let matched = self
            .repository
            .update_by_name(name, &input.description, input.price)
            .await?;

        if matched == 0 {
            return Err(ItemError::NotFound(name.to_string()));
        }

        // Re-read so the caller sees the record as stored
        self.get_item(name).await
    }

    /// Delete the first item with the given name
    #[instrument(skip(self))]
    pub async fn delete_item(&self, name: &str) -> ItemResult<ItemDeleted> {
        let deleted = self.repository.delete_by_name(name).await?;

        if deleted == 1 {
            Ok(ItemDeleted::default())
        } else {
            Err(ItemError::NotFound(name.to_string()))
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
