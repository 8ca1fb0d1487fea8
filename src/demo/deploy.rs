//! Deploy tool definition.
//!
//! Example tool used by the demo server and the extraction tests: one
//! required parameter and one optional parameter with a default.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

/// Parameters for the deploy tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeployParams {
    /// Target environment to deploy to.
    pub environment: String,

    /// Validate the deployment without applying it.
    #[serde(default)]
    pub dry_run: bool,
}

/// Deploy tool - pretends to deploy a service to an environment.
pub struct DeployTool;

impl DeployTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "deploy";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Deploy the service to a target environment. Supports dry-run validation.";

    /// Execute the tool logic.
    pub fn execute(params: &DeployParams) -> CallToolResult {
        info!(
            "Deploy tool called for environment: {} (dry_run: {})",
            params.environment, params.dry_run
        );

        let message = if params.dry_run {
            format!("Dry run: deployment to '{}' validated", params.environment)
        } else {
            format!("Deployed to '{}'", params.environment)
        };

        CallToolResult::success(vec![Content::text(message)])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        let mut tool = Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<DeployParams>(),
        );
        tool.annotations = Some(ToolAnnotations::with_title("Deploy a service"));
        tool
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: DeployParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
