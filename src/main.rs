//! Demo server entry point.
//!
//! Registers the demo tools, runs the one-shot documentation setup, and
//! serves the documentation endpoints plus a health check over HTTP.

use anyhow::Result;
use axum::{Json, response::IntoResponse, routing::get};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use mcp_docs::core::{Config, Error};
use mcp_docs::docs::{DocsService, RouterSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting mcp_docs demo server v{}", env!("CARGO_PKG_VERSION"));

    // Register the demo tools the way a host server would
    let router = mcp_docs::demo::build_tool_router::<()>();
    let source = RouterSource::new("Example MCP Server", router)
        .with_tags("deploy", ["ops"])
        .with_tags("greet", ["greetings"]);

    // One-shot documentation setup: extract once, then serve the snapshot
    let docs = DocsService::setup(config.docs, &source).await?;

    let app = docs.router().route("/health", get(health_check));

    let addr = format!("{}:{}", config.http.host, config.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::bind(&addr, e))?;

    info!("Ready - listening on {}", addr);
    info!("  → Docs UI: GET {}", docs.config().docs_ui_route);
    info!("  → OpenAPI: GET {}", docs.config().openapi_route);
    info!("  → API:     GET {}", docs.config().api_tools_route);

    axum::serve(listener, app).await?;

    info!("Server shutting down");

    Ok(())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
