//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// Default collection holding item documents
pub const DEFAULT_COLLECTION: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository over the `items` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("testdb");
    /// let repo = MongoItemRepository::new(&db);
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Item>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection
    pub fn collection(&self) -> &Collection<Item> {
        &self.collection
    }

    fn name_filter(name: &str) -> Document {
        doc! { "name": name }
    }

    fn set_fields(description: &str, price: f64) -> Document {
        doc! { "$set": { "description": description, "price": price } }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    async fn insert(&self, item: &Item) -> ItemResult<()> {
        let result = self.collection.insert_one(item).await?;

        tracing::info!(inserted_id = %result.inserted_id, "Item inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self, limit: i64) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let item = self.collection.find_one(Self::name_filter(name)).await?;
        Ok(item)
    }

    #[instrument(skip(self, description))]
    async fn update_by_name(&self, name: &str, description: &str, price: f64) -> ItemResult<u64> {
        let result = self
            .collection
            .update_one(Self::name_filter(name), Self::set_fields(description, price))
            .await?;

        tracing::info!(
            matched = result.matched_count,
            modified = result.modified_count,
            "Item update applied"
        );
        Ok(result.matched_count)
    }

    #[instrument(skip(self))]
    async fn delete_by_name(&self, name: &str) -> ItemResult<u64> {
        let result = self.collection.delete_one(Self::name_filter(name)).await?;

        tracing::info!(deleted = result.deleted_count, "Item delete applied");
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_filter() {
        let filter = MongoItemRepository::name_filter("widget");
        assert_eq!(filter, doc! { "name": "widget" });
    }

    #[test]
    fn test_set_fields_never_touches_name() {
        let update = MongoItemRepository::set_fields("new", 5.0);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("description").unwrap(), "new");
        assert_eq!(set.get_f64("price").unwrap(), 5.0);
        assert!(!set.contains_key("name"));
    }
}
