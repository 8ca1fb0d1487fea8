//! MCP Documentation Generator
//!
//! This crate generates Swagger-style documentation for MCP servers built
//! on rmcp. It inspects the registered tools, extracts their names,
//! descriptions, tags and parameter schemas into read-only records, and
//! serves a browsable HTML UI plus an OpenAPI 3.1.0 document and a JSON
//! tool-listing API.
//!
//! # Architecture
//!
//! - **core**: configuration and error handling
//! - **docs**: the extraction-and-serving pipeline (source, extractor,
//!   OpenAPI builder, routes, templates)
//! - **demo**: example tool definitions used by the demo binary and tests
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_docs::core::DocsConfig;
//! use mcp_docs::docs::{DocsService, RouterSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let router = mcp_docs::demo::build_tool_router::<()>();
//!     let source = RouterSource::new("Example MCP Server", router)
//!         .with_tags("deploy", ["ops"]);
//!
//!     let docs = DocsService::setup(DocsConfig::default(), &source).await?;
//!     let app = docs.router();
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod demo;
pub mod docs;

// Re-export commonly used types for convenience
pub use core::{Config, DocsConfig, DocsLink, Error, Result};
pub use docs::{DocsService, RouterSource, ToolRecord, ToolSource};
