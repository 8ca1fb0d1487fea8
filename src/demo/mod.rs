//! Demo tools for the example server.
//!
//! These definitions show what a host server registers; the demo binary and
//! the extraction tests both build their tool router from here. Each tool
//! follows the same shape: a params struct deriving `JsonSchema`, `NAME`/
//! `DESCRIPTION` consts, `execute()`, `to_tool()`, and `create_route()`.

mod deploy;
mod greet;
mod status;

pub use deploy::{DeployParams, DeployTool};
pub use greet::{GreetParams, GreetTool};
pub use status::{ServerStatusParams, ServerStatusTool};

use rmcp::handler::server::tool::ToolRouter;

/// Build the tool router with all demo tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(DeployTool::create_route())
        .with_route(GreetTool::create_route())
        .with_route(ServerStatusTool::create_route())
}
