//! Greet tool definition.
//!
//! Example tool with a single optional parameter.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

/// Parameters for the greet tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GreetParams {
    /// Name of the person to greet.
    #[serde(default)]
    pub name: Option<String>,
}

/// Greet tool - says hello to someone.
pub struct GreetTool;

impl GreetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "greet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Say hello to someone.";

    /// Execute the tool logic.
    pub fn execute(params: &GreetParams) -> CallToolResult {
        let name = params.name.as_deref().unwrap_or("World");
        info!("Greet tool called for: {}", name);

        CallToolResult::success(vec![Content::text(format!("Hello, {name}!"))])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            cached_schema_for_type::<GreetParams>(),
        )
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GreetParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_default_name() {
        let result = GreetTool::execute(&GreetParams { name: None });
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
    }

    #[test]
    fn test_schema_has_no_required_parameters() {
        let tool = GreetTool::to_tool();
        let schema = serde_json::Value::Object(tool.input_schema.as_ref().clone());

        let required = schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| a.len())
            .unwrap_or(0);
        assert_eq!(required, 0);
    }
}
