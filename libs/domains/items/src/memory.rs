//! In-memory implementation of ItemRepository
//!
//! Keeps records in insertion order so "first match" behaves like a fresh
//! MongoDB collection scanned in natural order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, item: &Item) -> ItemResult<()> {
        self.items.write().await.push(item.clone());
        Ok(())
    }

    async fn find_all(&self, limit: i64) -> ItemResult<Vec<Item>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let items = self.items.read().await;
        Ok(items.iter().take(limit).cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.name == name).cloned())
    }

    async fn update_by_name(&self, name: &str, description: &str, price: f64) -> ItemResult<u64> {
        let mut items = self.items.write().await;

        match items.iter_mut().find(|i| i.name == name) {
            Some(item) => {
                item.description = description.to_string();
                item.price = price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_name(&self, name: &str) -> ItemResult<u64> {
        let mut items = self.items.write().await;

        match items.iter().position(|i| i.name == name) {
            Some(index) => {
                items.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
