//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Handlers only shape
//! requests and responses; all cache behaviour lives in the services.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, Json};

use crate::api::extract::{ApiJson, ApiPath};
use crate::cache::{MapStore, QueueStore};
use crate::error::{CacheError, Result};
use crate::models::{
    EnqueueRequest, GetResponse, HealthResponse, MapEntriesResponse, MetadataResponse,
    QueueEntriesResponse, SetRequest, SetResponse, UpdateRequest, UpdateResponse,
    ValuesRequest, ValuesResponse,
};
use crate::service::{MapService, QueueItem, QueueService, SortSelector};

/// Application state shared across all handlers.
///
/// Each instance owns its own pair of stores; dropping it discards every entry.
#[derive(Clone)]
pub struct AppState {
    /// Keyed cache
    pub map: Arc<MapService>,
    /// FIFO cache
    pub queue: Arc<QueueService>,
}

impl AppState {
    /// Creates a new AppState over freshly constructed, empty stores.
    pub fn new() -> Self {
        Self::with_stores(Arc::new(MapStore::new()), Arc::new(QueueStore::new()))
    }

    /// Creates a new AppState over the given stores.
    pub fn with_stores(map_store: Arc<MapStore>, queue_store: Arc<QueueStore>) -> Self {
        Self {
            map: Arc::new(MapService::new(map_store)),
            queue: Arc::new(QueueService::new(queue_store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// == Map Handlers ==

/// Handler for PUT /map
pub async fn map_set_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let key = state.map.set(&req.key, req.value);
    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /map/entries/:key
pub async fn map_get_handler(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<Json<GetResponse>> {
    match state.map.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(format!("key '{}'", key))),
    }
}

/// Handler for GET /map
pub async fn map_all_handler(State(state): State<AppState>) -> Json<MapEntriesResponse> {
    Json(MapEntriesResponse::new(state.map.all()))
}

/// Handler for GET /map/list/:n
pub async fn map_list_handler(
    State(state): State<AppState>,
    ApiPath(n): ApiPath<i64>,
) -> Result<Json<MapEntriesResponse>> {
    let entries = state.map.get_entry_list(n)?;
    Ok(Json(MapEntriesResponse::new(entries)))
}

/// Handler for GET /map/sorted/:selector/:n
///
/// `selector` accepts `0`/`value` or `1`/`key`.
pub async fn map_sorted_handler(
    State(state): State<AppState>,
    ApiPath((selector, n)): ApiPath<(String, i64)>,
) -> Result<Json<MapEntriesResponse>> {
    let selector: SortSelector = selector.parse()?;
    let entries = state.map.get_sorted_entry_list(selector, n)?;
    Ok(Json(MapEntriesResponse::new(entries)))
}

/// Handler for PUT /map/entries/:key
pub async fn map_update_handler(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateRequest>,
) -> Result<Json<UpdateResponse>> {
    if let Some(error_msg) = req.validate(&key) {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let key = state.map.update_cache_entry(&key, req.value);
    Ok(Json(UpdateResponse::new(key)))
}

/// Handler for GET /map/entries/:key/metadata
pub async fn map_metadata_handler(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<Json<MetadataResponse>> {
    match state.map.metadata(&key) {
        Some(metadata) => Ok(Json(MetadataResponse { key, metadata })),
        None => Err(CacheError::NotFound(format!("key '{}'", key))),
    }
}

/// Handler for POST /map/values
pub async fn map_values_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ValuesRequest>,
) -> Result<Json<ValuesResponse>> {
    let values = state.map.get_list_of_values(&req.keys)?;
    Ok(Json(ValuesResponse { values }))
}

// == Queue Handlers ==

/// Handler for PUT /queue
///
/// A `ttl` is recorded on the entry but never triggers removal.
pub async fn queue_set_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<EnqueueRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let key = match req.ttl {
        Some(ttl) => state
            .queue
            .set_with_ttl(&req.key, req.value, Duration::from_secs(ttl)),
        None => state.queue.set(&req.key, req.value),
    };
    Ok(Json(SetResponse::new(key)))
}

/// Handler for POST /queue/dequeue
pub async fn queue_dequeue_handler(State(state): State<AppState>) -> Result<Json<QueueItem>> {
    state
        .queue
        .get()
        .map(Json)
        .ok_or_else(|| CacheError::NotFound("queue is empty".to_string()))
}

/// Handler for GET /queue/peek
pub async fn queue_peek_handler(State(state): State<AppState>) -> Result<Json<QueueItem>> {
    state
        .queue
        .peek()
        .map(Json)
        .ok_or_else(|| CacheError::NotFound("queue is empty".to_string()))
}

/// Handler for GET /queue
pub async fn queue_all_handler(State(state): State<AppState>) -> Json<QueueEntriesResponse> {
    Json(QueueEntriesResponse::new(state.queue.all()))
}

/// Handler for GET /queue/list/:n
pub async fn queue_list_handler(
    State(state): State<AppState>,
    ApiPath(n): ApiPath<i64>,
) -> Result<Json<QueueEntriesResponse>> {
    let entries = state.queue.get_entry_list(n)?;
    Ok(Json(QueueEntriesResponse::new(entries)))
}

/// Handler for GET /queue/sorted/:selector/:n
pub async fn queue_sorted_handler(
    State(state): State<AppState>,
    ApiPath((selector, n)): ApiPath<(String, i64)>,
) -> Result<Json<QueueEntriesResponse>> {
    let selector: SortSelector = selector.parse()?;
    let entries = state.queue.get_sorted_entries(selector, n)?;
    Ok(Json(QueueEntriesResponse::new(entries)))
}

/// Handler for PUT /queue/entries/:key
pub async fn queue_update_handler(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateRequest>,
) -> Result<Json<UpdateResponse>> {
    if let Some(error_msg) = req.validate(&key) {
        return Err(CacheError::InvalidArgument(error_msg));
    }

    let key = state.queue.update_value(&key, req.value);
    Ok(Json(UpdateResponse::new(key)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
