//! Route registration for the documentation endpoints.
//!
//! Binds four GET handlers onto an axum router: the UI page, the OpenAPI
//! document, the tool listing, and the single-tool lookup, plus a default
//! favicon when no custom one is configured. Every handler serves
//! statelessly from the read-only extraction snapshot; nothing is written,
//! so concurrent requests never interfere.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::extractor::ToolRecord;
use super::{openapi, templates};
use crate::core::DocsConfig;

/// Shared state for the documentation handlers.
///
/// Everything here is the last completed extraction plus configuration;
/// the handlers only read it.
#[derive(Clone)]
pub struct DocsState {
    /// Name of the host server, reported in the listing response.
    pub server_name: Arc<str>,

    /// Documentation configuration.
    pub config: Arc<DocsConfig>,

    /// Extraction snapshot.
    pub records: Arc<Vec<ToolRecord>>,
}

/// Build the documentation router from the extraction snapshot.
///
/// When CORS is enabled, permissive headers are applied to every
/// registered endpoint.
pub fn build_router(state: DocsState) -> Router {
    let config = &state.config;

    let mut router = Router::new()
        .route(&config.docs_ui_route, get(docs_ui))
        .route(&config.openapi_route, get(openapi_document))
        .route(&config.api_tools_route, get(list_tools))
        .route(&config.api_tool_detail_route(), get(tool_detail));

    // The default favicon is only served when no custom one is configured.
    if config.favicon_url.is_none() {
        router = router.route("/favicon.svg", get(favicon));
    }

    let enable_cors = config.enable_cors;
    let mut router = router.with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    info!("Documentation routes registered");

    router
}

/// Serve the documentation UI page.
async fn docs_ui(State(state): State<DocsState>) -> Html<String> {
    Html(templates::render_docs_ui(&state.config))
}

/// Serve the OpenAPI document.
async fn openapi_document(State(state): State<DocsState>) -> impl IntoResponse {
    Json(openapi::build_document(&state.config, &state.records))
}

/// Serve the full tool listing.
async fn list_tools(State(state): State<DocsState>) -> impl IntoResponse {
    Json(json!({
        "server": state.server_name.as_ref(),
        "total_tools": state.records.len(),
        "tools": state.records.as_ref(),
    }))
}

/// Serve a single tool record by exact name match.
async fn tool_detail(State(state): State<DocsState>, Path(name): Path<String>) -> Response {
    match state.records.iter().find(|record| record.name == name) {
        Some(record) => Json(record.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Tool '{name}' not found")})),
        )
            .into_response(),
    }
}

/// Serve the default favicon.
async fn favicon() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        templates::default_favicon_svg(),
    )
}
