//! Documentation domain.
//!
//! This module turns a host server's registered tools into browsable
//! documentation:
//!
//! - `source.rs` - capability interface over the host's tool registry
//! - `extractor.rs` - one-shot extraction into read-only tool records
//! - `openapi.rs` - OpenAPI 3.1.0 document generation
//! - `routes.rs` - axum route registration for the four endpoints
//! - `templates.rs` - self-contained HTML UI
//!
//! The composition is a straight pipeline: config → extract → register.
//! [`DocsService::setup`] runs the extraction once; the routes serve every
//! request from that snapshot.

pub mod extractor;
pub mod openapi;
pub mod routes;
pub mod source;
pub mod templates;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::core::{DocsConfig, Result};
pub use extractor::{ParameterDescriptor, ToolExtractor, ToolRecord};
pub use routes::DocsState;
pub use source::{RouterSource, ToolMeta, ToolSource};

/// Documentation service: the extraction snapshot plus configuration.
///
/// Created once via [`DocsService::setup`] after all tools are registered
/// with the host server and before serving traffic.
pub struct DocsService {
    server_name: Arc<str>,
    config: Arc<DocsConfig>,
    records: Arc<Vec<ToolRecord>>,
}

impl DocsService {
    /// Extract documentation from the host's tools and prepare the service.
    ///
    /// Fails with an integration error when the source cannot enumerate the
    /// registry; there is no partial setup.
    pub async fn setup(config: DocsConfig, source: &dyn ToolSource) -> Result<Self> {
        let extractor = ToolExtractor::new(config.verbose);
        let records = extractor.extract(source).await?;

        info!("Documentation setup complete: {} tools", records.len());
        info!("  Docs UI: {}", config.docs_ui_route);
        info!("  OpenAPI: {}", config.openapi_route);
        info!("  API:     {}", config.api_tools_route);

        Ok(Self {
            server_name: Arc::from(source.server_name()),
            config: Arc::new(config),
            records: Arc::new(records),
        })
    }

    /// The extracted tool records.
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    /// The documentation configuration.
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Build the axum router serving the documentation endpoints.
    pub fn router(&self) -> Router {
        routes::build_router(DocsState {
            server_name: self.server_name.clone(),
            config: self.config.clone(),
            records: self.records.clone(),
        })
    }
}
