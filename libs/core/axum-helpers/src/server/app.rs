use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Wraps `routes` with the cross-cutting pieces every service shares.
///
/// - `GET /api-docs/openapi.json` serving `T::openapi()`
/// - JSON 404 fallback
/// - request tracing, security headers, `cors`, response compression
///
/// Routes are mounted at the root; state must already be applied.
///
/// ```ignore
/// let routes = Router::new()
///     .merge(liveness_router(app_info))
///     .merge(domain_items::handlers::router(service));
/// let router = create_router::<ApiDoc>(routes, cors_layer(&origins)?);
/// ```
pub fn create_router<T>(routes: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    let document = T::openapi();

    Router::new()
        .route(OPENAPI_PATH, get(move || async move { Json(document) }))
        .merge(routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Binds `server_config.address()` and serves until SIGINT/SIGTERM.
///
/// `cleanup` runs after the server stops accepting connections, bounded by
/// `server_config.shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    let coordinator = ShutdownCoordinator::new();

    let signal_handle = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_signal().await }
    });

    let result = serve_until_shutdown(
        listener,
        router,
        coordinator,
        server_config.shutdown_timeout,
        cleanup,
    )
    .await;

    signal_handle.abort();
    result
}

/// Serves on an already bound listener until `coordinator` signals shutdown,
/// then runs `cleanup` within `shutdown_timeout`.
pub async fn serve_until_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let shutdown = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "Server encountered an error");
        });

    info!(timeout = ?shutdown_timeout, "Server stopped, running cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup exceeded timeout, forcing shutdown"),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::cors::create_permissive_cors_layer;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test service"))]
    struct TestDoc;

    fn app() -> Router {
        let routes = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<TestDoc>(routes, create_permissive_cors_layer())
    }

    #[tokio::test]
    async fn test_routes_are_mounted_at_root() {
        let response = app()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = app()
            .oneshot(Request::get(OPENAPI_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "test service");
    }

    #[tokio::test]
    async fn test_unknown_path_returns_json_404() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "error", "message": "Not found" }));
    }

    #[tokio::test]
    async fn test_serve_until_shutdown_runs_cleanup() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let coordinator = ShutdownCoordinator::new();
        let cleaned = Arc::new(AtomicBool::new(false));

        let handle = tokio::spawn({
            let coordinator = coordinator.clone();
            let cleaned = cleaned.clone();
            async move {
                serve_until_shutdown(listener, app(), coordinator, Duration::from_secs(1), async move {
                    cleaned.store(true, Ordering::SeqCst);
                })
                .await
            }
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        coordinator.shutdown();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
        assert!(cleaned.load(Ordering::SeqCst));
    }
}
