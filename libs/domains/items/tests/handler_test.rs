//! Handler tests for the items search domain
//!
//! These drive `handlers::router` directly:
//! - query/owner extraction from the query string and header
//! - response envelope and result shape
//! - generic error responses
//!
//! Backed by the in-memory repository unless a test needs a failing store.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use database::mongodb::{MongoConfig, client_from_config};
use domain_items::{
    InMemoryItemRepository, Item, ItemQuery, ItemRepository, ItemSummary, MAX_RESULTS,
    MongoItemRepository, SEARCH_ERROR_MESSAGE, SearchResult, SearchService, handlers,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use test_utils::TestDataBuilder;
use test_utils::assertions::assert_at_most;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(items: Vec<Item>) -> Router {
    handlers::router(SearchService::new(InMemoryItemRepository::with_items(items)))
}

async fn get(app: Router, uri: &str, owner_header: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(owner) = owner_header {
        request = request.header("x-user-id", owner);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

#[tokio::test]
async fn test_kitchen_example_scoped_to_owner() {
    let app = app(vec![
        Item::new("Kitchen Table", "Kitchen", "u1"),
        Item::new("Garage Shelf", "Garage", "u1"),
    ]);

    let (status, body) = get(app, "/search?query=kitchen&userId=u1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["query"], "kitchen");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "Kitchen Table");
    assert_eq!(body["results"][0]["location"], "Kitchen");
}

#[tokio::test]
async fn test_blank_query_returns_empty_success() {
    let items = vec![Item::new("Lamp", "Bedroom", "u1")];

    for uri in ["/search", "/search?query=", "/search?query=%20%20%20&userId=u1"] {
        let (status, body) = get(app(items.clone()), uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "success", "query": "", "count": 0, "results": [] })
        );
    }
}

#[tokio::test]
async fn test_uppercase_query_matches_lowercase_name() {
    let app = app(vec![Item::new("cardboard box", "Attic", "u1")]);

    let (status, body) = get(app, "/search?query=BOX&userId=u1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "box");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "cardboard box");
}

#[tokio::test]
async fn test_results_never_cross_owners() {
    let builder = TestDataBuilder::from_test_name("handler_owner_isolation");
    let owner = builder.user_id();
    let other = builder.other_user_id();

    let app = app(vec![
        Item::new("Lamp", "Bedroom", owner.as_str()),
        Item::new("Lamp", "Office", other.as_str()),
        Item::new("Desk lamp", "Office", other.as_str()),
    ]);

    let uri = format!("/search?query=lamp&userId={}", owner);
    let (_, body) = get(app, &uri, None).await;

    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["location"], "Bedroom");
}

#[tokio::test]
async fn test_owner_from_header_when_param_missing_or_empty() {
    let items = vec![
        Item::new("Lamp", "Bedroom", "u1"),
        Item::new("Lamp", "Office", "u2"),
    ];

    let (_, body) = get(app(items.clone()), "/search?query=lamp", Some("u2")).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["location"], "Office");

    let (_, body) = get(app(items.clone()), "/search?query=lamp&userId=", Some("u2")).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["location"], "Office");

    let (_, body) = get(app(items), "/search?query=lamp&userId=u1", Some("u2")).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["location"], "Bedroom");
}

#[tokio::test]
async fn test_missing_owner_searches_all_owners() {
    let app = app(vec![
        Item::new("Lamp", "Bedroom", "u1"),
        Item::new("Lamp", "Office", "u2"),
    ]);

    let (status, body) = get(app, "/search?query=lamp", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_result_shape_and_limit() {
    let items: Vec<Item> = (0..14)
        .map(|n| Item::new(format!("Box {}", n), "Attic", "u1"))
        .collect();
    let first_id = items[0].id.to_hex();

    let (_, body) = get(app(items), "/search?query=box&userId=u1", None).await;
    let results = body["results"].as_array().unwrap();

    assert_at_most(results.len(), MAX_RESULTS, "results");
    assert_eq!(body["count"], results.len());
    assert_eq!(results[0]["id"], first_id.as_str());

    for hit in results {
        let id = hit["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_eq!(hit["_id"], id);
        assert!(hit.get("room").is_none());
        assert!(hit.get("userId").is_none());
        assert!(hit.get("quantity").is_none());
    }
}

#[tokio::test]
async fn test_metacharacters_match_literally() {
    let app = app(vec![
        Item::new("Box (large)", "Attic", "u1"),
        Item::new("Boxes", "Attic", "u1"),
    ]);

    let (_, body) = get(app.clone(), "/search?query=%28large%29", None).await;
    assert_eq!(body["count"], 1);

    let (_, body) = get(app, "/search?query=b.x", None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_unreachable_store_returns_generic_500() {
    let config = MongoConfig::new("mongodb://127.0.0.1:1/homeviu").with_server_selection_timeout(1);
    let client = client_from_config(&config).await.unwrap();
    let repository = MongoItemRepository::new(client.database("homeviu"));
    let app = handlers::router(SearchService::new(repository));

    let (status, body) = get(app, "/search?query=lamp&userId=u1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Internal search error" })
    );
}

struct SlowRepository;

#[async_trait]
impl ItemRepository for SlowRepository {
    async fn search(&self, _query: &ItemQuery) -> SearchResult<Vec<ItemSummary>> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_lookup_timeout_returns_generic_500() {
    let service = SearchService::new(SlowRepository).with_timeout(Duration::from_millis(50));
    let app = handlers::router(service);

    let (status, body) = get(app, "/search?query=lamp", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], SEARCH_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_blank_query_short_circuits_even_when_store_is_slow() {
    let service = SearchService::new(SlowRepository).with_timeout(Duration::from_millis(50));
    let app = handlers::router(service);

    let (status, body) = get(app, "/search?query=%20", Some("u1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}
