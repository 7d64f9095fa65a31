//! Search Service - normalize, short-circuit, look up, shape

use std::sync::Arc;
use std::time::Duration;
use tracing::{Span, debug, field, instrument};

use crate::error::{SearchError, SearchResult};
use crate::models::{SearchHit, SearchResponse};
use crate::query::{ItemQuery, MAX_RESULTS, normalize_query};
use crate::repository::ItemRepository;

/// Lookup budget when none is configured
pub const DEFAULT_SEARCH_TIMEOUT: Duration = Duration::from_millis(5000);

pub struct SearchService<R: ItemRepository> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R: ItemRepository> SearchService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            timeout: DEFAULT_SEARCH_TIMEOUT,
        }
    }

    /// Bound each lookup; expiry is reported as [`SearchError::Timeout`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Search the catalog for `raw_query`, scoped to `owner` when given.
    ///
    /// A missing or blank query returns an empty success envelope without
    /// touching the repository.
    #[instrument(skip(self, raw_query), fields(query = field::Empty))]
    pub async fn search(
        &self,
        raw_query: Option<&str>,
        owner: Option<&str>,
    ) -> SearchResult<SearchResponse> {
        let text = normalize_query(raw_query.unwrap_or_default());
        if text.is_empty() {
            debug!("Blank query, skipping lookup");
            return Ok(SearchResponse::empty());
        }
        Span::current().record("query", text.as_str());

        if owner.is_none() {
            debug!("No owner identifier, searching across all owners");
        }

        let query = ItemQuery::new(text, owner.map(str::to_owned));
        let items = tokio::time::timeout(self.timeout, self.repository.search(&query))
            .await
            .map_err(|_| SearchError::Timeout(self.timeout))??;

        let results: Vec<SearchHit> = items
            .into_iter()
            .take(MAX_RESULTS)
            .map(SearchHit::from)
            .collect();

        debug!(count = results.len(), "Search completed");
        Ok(SearchResponse::new(query.text, results))
    }
}

impl<R: ItemRepository> Clone for SearchService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            timeout: self.timeout,
        }
    }
}
