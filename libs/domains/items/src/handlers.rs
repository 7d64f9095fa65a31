use axum::{
    Json, Router,
    extract::{FromRequestParts, Query, State},
    http::request::Parts,
    routing::get,
};
use axum_helpers::{ErrorResponse, errors::responses::InternalServerErrorResponse};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::SearchResult;
use crate::models::{SearchHit, SearchResponse};
use crate::query::resolve_owner;
use crate::repository::ItemRepository;
use crate::service::SearchService;

/// Header carrying the owner identifier when `userId` is not in the query string
pub const USER_ID_HEADER: &str = "x-user-id";

/// OpenAPI documentation for the search API
#[derive(OpenApi)]
#[openapi(
    paths(search_items),
    components(
        schemas(SearchResponse, SearchHit, ErrorResponse),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Search", description = "Item search (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Query string of `GET /search`, for documentation.
///
/// Extraction goes through [`SearchRequest`], which tolerates repeated
/// parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free text; trimmed and lowercased before matching
    pub query: Option<String>,
    /// Owner identifier; takes precedence over the `x-user-id` header
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Inputs of a search request.
///
/// Never rejects: unparseable or repeated parameters resolve to the first
/// occurrence or to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub owner: Option<String>,
}

impl<S> FromRequestParts<S> for SearchRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok());

        Ok(Self {
            query: first_param(&pairs, "query").map(str::to_owned),
            owner: resolve_owner(first_param(&pairs, "userId"), header),
        })
    }
}

fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Router serving `GET /search`
pub fn router<R: ItemRepository + 'static>(service: SearchService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/search", get(search_items))
        .with_state(shared_service)
}

/// Search items by free text
///
/// Case-insensitive substring match over name, location, room, category and
/// description, limited to 10 results.
#[utoipa::path(
    get,
    path = "/search",
    tag = "Search",
    params(
        SearchParams,
        ("x-user-id" = Option<String>, Header, description = "Owner identifier, used when `userId` is absent or empty")
    ),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items<R: ItemRepository>(
    State(service): State<Arc<SearchService<R>>>,
    request: SearchRequest,
) -> SearchResult<Json<SearchResponse>> {
    let response = service
        .search(request.query.as_deref(), request.owner.as_deref())
        .await?;
    Ok(Json(response))
}
