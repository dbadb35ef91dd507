use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::Item;

/// Repository trait for Item persistence
///
/// Every lookup is keyed by `name`. Names are not unique, so the `*_by_name`
/// operations act on the first matching record in store order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new record
    async fn insert(&self, item: &Item) -> ItemResult<()>;

    /// Fetch up to `limit` records in store order
    async fn find_all(&self, limit: i64) -> ItemResult<Vec<Item>>;

    /// Fetch the first record with the given name
    async fn find_by_name(&self, name: &str) -> ItemResult<Option<Item>>;

    /// Set description and price on the first record with the given name.
    /// Returns the number of matched records (0 or 1).
    async fn update_by_name(&self, name: &str, description: &str, price: f64) -> ItemResult<u64>;

    /// Delete the first record with the given name.
    /// Returns the number of deleted records (0 or 1).
    async fn delete_by_name(&self, name: &str) -> ItemResult<u64>;
}
