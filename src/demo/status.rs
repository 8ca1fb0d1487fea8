//! Server status tool definition.
//!
//! Example tool without parameters, exercising the no-parameter rendering
//! path in the documentation UI.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the server status tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerStatusParams {}

/// Server status tool - reports the server version and uptime timestamp.
pub struct ServerStatusTool;

impl ServerStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "server_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Report the server version and current timestamp.";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        let status = format!(
            "version {} at {}",
            env!("CARGO_PKG_VERSION"),
            chrono::Utc::now().to_rfc3339()
        );
        CallToolResult::success(vec![Content::text(status)])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<ServerStatusParams>(),
        )
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}
