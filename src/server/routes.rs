//! Route handlers for the demo server.

use crate::client::Resolver;
use crate::display::render_index_html;
use crate::error::{FetchError, FetchErrorKind};
use crate::metrics::MetricsSummary;
use crate::services::CatalogService;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// Endpoint served by `/api` when no `endpoint` query parameter is given.
pub const DEFAULT_API_ENDPOINT: &str = "films/";

/// State shared across handlers.
pub struct AppState {
    pub resolver: Arc<dyn Resolver>,
    pub catalog: Arc<dyn CatalogService>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(resolver: Arc<dyn Resolver>, catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            resolver,
            catalog,
            start_time: Instant::now(),
        }
    }
}

type AppStateArc = Arc<AppState>;

/// Build the router for `/`, `/api` and `/stats`.
pub fn router(state: AppStateArc) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api", get(api))
        .route("/stats", get(stats))
        .with_state(state)
}

async fn index(State(state): State<AppStateArc>) -> Html<String> {
    let films = state.catalog.films().await;
    let summary = state.resolver.metrics();
    let cache_size = state.resolver.cache_size();

    let films = films.as_ref().map_err(|e| e.to_string());
    Html(render_index_html(films, &summary, cache_size))
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    endpoint: Option<String>,
}

async fn api(
    State(state): State<AppStateArc>,
    Query(query): Query<ApiQuery>,
) -> Result<Json<serde_json::Value>, FetchFailure> {
    let endpoint = query
        .endpoint
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

    let value = state.resolver.resolve(&endpoint).await?;
    Ok(Json(value.as_ref().clone()))
}

/// Body of `/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub metrics: MetricsSummary,
    pub cache_size: usize,
    pub uptime_seconds: u64,
}

async fn stats(State(state): State<AppStateArc>) -> Json<StatsResponse> {
    Json(StatsResponse {
        metrics: state.resolver.metrics(),
        cache_size: state.resolver.cache_size(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// A fetch failure rendered as a JSON error response.
pub struct FetchFailure(FetchError);

impl From<FetchError> for FetchFailure {
    fn from(err: FetchError) -> Self {
        Self(err)
    }
}

impl IntoResponse for FetchFailure {
    fn into_response(self) -> Response {
        let status = match self.0.kind() {
            FetchErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
            FetchErrorKind::HttpStatus
            | FetchErrorKind::Transport
            | FetchErrorKind::MalformedBody => StatusCode::BAD_GATEWAY,
        };

        let body = json!({
            "error": self.0.to_string(),
            "kind": self.0.kind().as_str(),
            "endpoint": self.0.endpoint(),
        });

        (status, Json(body)).into_response()
    }
}
