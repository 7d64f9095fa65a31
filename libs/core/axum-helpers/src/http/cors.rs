use axum::http::{HeaderName, HeaderValue, Method};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Builds the CORS layer for a service.
///
/// An empty `allowed_origins` list allows any origin. Otherwise only the
/// listed origins are allowed, with credentials.
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn cors_layer(allowed_origins: &[String]) -> io::Result<CorsLayer> {
    if allowed_origins.is_empty() {
        info!("CORS configured to allow any origin");
        return Ok(create_permissive_cors_layer());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(origins = ?allowed_origins, "CORS configured with allowed origins");
    Ok(create_cors_layer(origins))
}

/// Creates a CORS layer restricted to `allowed_origins`.
///
/// - Methods: GET, HEAD, OPTIONS
/// - Headers: Content-Type, Accept, Authorization, x-user-id
/// - Credentials allowed, 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::header::AUTHORIZATION,
            HeaderName::from_static("x-user-id"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Creates a CORS layer that allows any origin, method and header.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
