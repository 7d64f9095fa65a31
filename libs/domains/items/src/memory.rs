//! In-memory ItemRepository for tests and local development.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::SearchResult;
use crate::models::{Item, ItemSummary};
use crate::query::{ItemQuery, MAX_RESULTS};
use crate::repository::ItemRepository;

/// Keeps items in insertion order, which stands in for the natural order of
/// a collection scan.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn insert(&self, item: Item) {
        self.items.write().await.push(item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn search(&self, query: &ItemQuery) -> SearchResult<Vec<ItemSummary>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| query.matches(item))
            .take(MAX_RESULTS)
            .map(ItemSummary::from)
            .collect())
    }
}
