//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, map_all_handler, map_get_handler, map_list_handler, map_metadata_handler,
    map_set_handler, map_sorted_handler, map_update_handler, map_values_handler,
    queue_all_handler, queue_dequeue_handler, queue_list_handler, queue_peek_handler,
    queue_set_handler, queue_sorted_handler, queue_update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Map Endpoints
/// - `PUT /map` - Store a key-value pair
/// - `GET /map` - List every entry
/// - `GET /map/entries/:key` - Retrieve a value by key
/// - `PUT /map/entries/:key` - Overwrite a value
/// - `GET /map/entries/:key/metadata` - Length and emptiness of a value
/// - `GET /map/list/:n` - First n entries
/// - `GET /map/sorted/:selector/:n` - First n entries sorted by key or value
/// - `POST /map/values` - Values for a list of keys
///
/// # Queue Endpoints
/// - `PUT /queue` - Append an entry, optionally with a TTL
/// - `POST /queue/dequeue` - Remove and return the head
/// - `GET /queue/peek` - Return the head without removing it
/// - `GET /queue` - List every entry
/// - `GET /queue/list/:n` - First n entries
/// - `GET /queue/sorted/:selector/:n` - First n entries sorted by key or value
/// - `PUT /queue/entries/:key` - Overwrite the first entry with that key
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/map", put(map_set_handler).get(map_all_handler))
        .route(
            "/map/entries/:key",
            get(map_get_handler).put(map_update_handler),
        )
        .route("/map/entries/:key/metadata", get(map_metadata_handler))
        .route("/map/list/:n", get(map_list_handler))
        .route("/map/sorted/:selector/:n", get(map_sorted_handler))
        .route("/map/values", post(map_values_handler))
        .route("/queue", put(queue_set_handler).get(queue_all_handler))
        .route("/queue/dequeue", post(queue_dequeue_handler))
        .route("/queue/peek", get(queue_peek_handler))
        .route("/queue/list/:n", get(queue_list_handler))
        .route("/queue/sorted/:selector/:n", get(queue_sorted_handler))
        .route("/queue/entries/:key", put(queue_update_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new())
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_map_set_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/map")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"key":"test","value":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_map_get_not_found() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/map/entries/nonexistent").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_listing_endpoints_on_empty_stores() {
        for uri in ["/map", "/map/list/3", "/map/sorted/key/3", "/queue", "/queue/list/0"] {
            assert_eq!(status_of(create_test_app(), "GET", uri).await, StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_bad_selector_is_bad_request() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/queue/sorted/9/2").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_dequeue_empty_is_not_found() {
        assert_eq!(
            status_of(create_test_app(), "POST", "/queue/dequeue").await,
            StatusCode::NOT_FOUND
        );
    }
}
