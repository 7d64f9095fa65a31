use async_trait::async_trait;

use crate::error::SearchResult;
use crate::models::ItemSummary;
use crate::query::ItemQuery;

/// Read access to the item catalog.
///
/// Implementations return at most [`MAX_RESULTS`](crate::query::MAX_RESULTS)
/// matches in the store's natural order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Items matching `query`, projected to the searched fields
    async fn search(&self, query: &ItemQuery) -> SearchResult<Vec<ItemSummary>>;
}
