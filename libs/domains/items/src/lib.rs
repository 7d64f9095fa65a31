//! Items Domain
//!
//! Read-only free-text search over the inventory item catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /search, owner/query extraction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← normalize, short-circuit, timeout, shape
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + MongoDB / in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemSummary, SearchHit, SearchResponse
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, mongodb::MongoItemRepository, service::SearchService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoItemRepository::new(client.database("homeviu"));
//! let router = handlers::router(SearchService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod query;
pub mod repository;
pub mod service;

pub use error::{SEARCH_ERROR_MESSAGE, SearchError, SearchResult};
pub use handlers::{ApiDoc, SearchRequest};
pub use memory::InMemoryItemRepository;
pub use models::{Item, ItemSummary, SearchHit, SearchResponse};
pub use self::mongodb::MongoItemRepository;
pub use query::{ItemQuery, MAX_RESULTS, normalize_query};
pub use repository::ItemRepository;
pub use service::SearchService;
