//! Tool source abstraction - the seam between the documentation layer and
//! the host MCP server.
//!
//! The extractor never touches host framework types directly. It consumes
//! the [`ToolSource`] capability (list tools, read per-tool metadata), which
//! keeps the extraction and route registration portable across host
//! runtimes. [`RouterSource`] adapts an rmcp `ToolRouter` to that interface.

use std::collections::{BTreeMap, BTreeSet};

use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::Tool;
use serde_json::Value;

use crate::core::Result;

/// Per-tool metadata exposed by a host server.
///
/// This is a serde-friendly snapshot of what the host registered, detached
/// from the host framework's own model types.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolMeta {
    /// Tool identifier, unique within the host registry.
    pub name: String,

    /// Optional human-friendly display title.
    pub title: Option<String>,

    /// Optional description of the tool's behavior.
    pub description: Option<String>,

    /// Tags recorded for the tool. Empty when the host recorded none.
    pub tags: BTreeSet<String>,

    /// JSON Schema describing the tool's input arguments, when declared.
    pub input_schema: Option<Value>,
}

impl From<&Tool> for ToolMeta {
    fn from(tool: &Tool) -> Self {
        // The top-level title wins over the annotations title when both are set.
        let title = tool
            .title
            .clone()
            .or_else(|| tool.annotations.as_ref().and_then(|a| a.title.clone()));

        Self {
            name: tool.name.to_string(),
            title,
            description: tool.description.as_ref().map(|d| d.to_string()),
            tags: BTreeSet::new(),
            input_schema: Some(Value::Object(tool.input_schema.as_ref().clone())),
        }
    }
}

/// Capability interface over a host server's tool registry.
///
/// Implementations enumerate the registered tools and surface their
/// metadata. A failure here signals an integration mismatch (the host does
/// not expose the expected registry) and aborts documentation setup.
#[async_trait::async_trait]
pub trait ToolSource: Send + Sync {
    /// Name of the host server, reported in the tool listing response.
    fn server_name(&self) -> &str;

    /// Enumerate the registered tools.
    async fn list_tools(&self) -> Result<Vec<ToolMeta>>;
}

/// [`ToolSource`] adapter over an rmcp `ToolRouter`.
///
/// The rmcp `Tool` model carries no tags, so tag assignments live in a side
/// table keyed by tool name and are merged into the metadata on listing.
pub struct RouterSource<S> {
    name: String,
    router: ToolRouter<S>,
    tags: BTreeMap<String, BTreeSet<String>>,
}

impl<S> RouterSource<S>
where
    S: Send + Sync + 'static,
{
    /// Wrap a tool router under the given server name.
    pub fn new(name: impl Into<String>, router: ToolRouter<S>) -> Self {
        Self {
            name: name.into(),
            router,
            tags: BTreeMap::new(),
        }
    }

    /// Record tags for a tool by name.
    ///
    /// Tags for names that are not registered with the router are silently
    /// ignored at listing time.
    pub fn with_tags<I, T>(mut self, tool_name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags
            .entry(tool_name.into())
            .or_default()
            .extend(tags.into_iter().map(Into::into));
        self
    }
}

#[async_trait::async_trait]
impl<S> ToolSource for RouterSource<S>
where
    S: Send + Sync + 'static,
{
    fn server_name(&self) -> &str {
        &self.name
    }

    async fn list_tools(&self) -> Result<Vec<ToolMeta>> {
        let metas = self
            .router
            .list_all()
            .iter()
            .map(|tool| {
                let mut meta = ToolMeta::from(tool);
                if let Some(tags) = self.tags.get(&meta.name) {
                    meta.tags = tags.clone();
                }
                meta
            })
            .collect();
        Ok(metas)
    }
}
