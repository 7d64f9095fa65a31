//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
    options::FindOptions,
};
use std::time::Duration;
use tracing::instrument;

use crate::error::SearchResult;
use crate::models::ItemSummary;
use crate::query::{ItemQuery, MAX_RESULTS, SEARCH_FIELDS};
use crate::repository::ItemRepository;
use crate::service::DEFAULT_SEARCH_TIMEOUT;

/// Collection the catalog service writes items to
pub const DEFAULT_COLLECTION: &str = "items";

pub struct MongoItemRepository {
    collection: Collection<ItemSummary>,
    max_time: Duration,
}

impl MongoItemRepository {
    /// Repository over the `items` collection of `db`.
    ///
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("homeviu"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ItemSummary>(collection_name),
            max_time: DEFAULT_SEARCH_TIMEOUT,
        }
    }

    /// Server-side execution limit (`maxTimeMS`) for each lookup.
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn collection(&self) -> &Collection<ItemSummary> {
        &self.collection
    }

    /// Filter document for `query`.
    ///
    /// ```json
    /// { "userId": "u1", "$or": [ { "name": { "$regex": "box", "$options": "i" } }, ... ] }
    /// ```
    ///
    /// The text is regex-escaped so it matches literally.
    pub fn build_filter(query: &ItemQuery) -> Document {
        let pattern = regex::escape(&query.text);
        let mut filter = doc! {};

        if let Some(ref owner) = query.owner {
            filter.insert("userId", owner.as_str());
        }

        let clauses: Vec<Document> = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                clause
            })
            .collect();
        filter.insert("$or", clauses);

        filter
    }

    /// Fields returned for each match
    pub fn projection() -> Document {
        doc! {
            "_id": 1,
            "name": 1,
            "location": 1,
            "room": 1,
            "category": 1,
            "description": 1,
        }
    }

    fn find_options(&self) -> FindOptions {
        FindOptions::builder()
            .projection(Self::projection())
            .limit(MAX_RESULTS as i64)
            .max_time(self.max_time)
            .build()
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, query), fields(query = %query.text, owner = ?query.owner))]
    async fn search(&self, query: &ItemQuery) -> SearchResult<Vec<ItemSummary>> {
        let filter = Self::build_filter(query);

        let cursor = self
            .collection
            .find(filter)
            .with_options(self.find_options())
            .await?;
        let items: Vec<ItemSummary> = cursor.try_collect().await?;

        tracing::debug!(count = items.len(), "MongoDB search completed");
        Ok(items)
    }
}
