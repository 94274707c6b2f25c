//! MCP server implementation for hold-mcp.
//!
//! This crate wires the holding-invoice control plane into rmcp tool handlers
//! and provides stdio and streamable HTTP runners.

mod helpers;
mod tools;
pub mod server;

use hold_core::control::HoldControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

pub use tools::invoices::GetHoldingReasonDetailParams;

const SERVER_INSTRUCTIONS: &str = r"hold-mcp exposes invoices that are on hold (blocked from processing) and why.

Workflow:
1. `list_holding_invoices` to see every held invoice with its id, status, and reason.
2. `get_holding_reason_detail` with an `invoice_id` (e.g. `INV-001`) for the detailed explanation
   and a `search_query` to use against the policy handbook.
   Ids are matched exactly. An unknown id returns an error payload with `available_ids`.
3. `get_all_holding_reason_details` returns every detail at once; prefer the single lookup when possible.
4. `get_invoice_statistics` returns `total_holding`, `reason_distribution`, `most_common_reason`,
   `most_common_count`, and `unique_reasons`.

Notes:
- Data is read-only; repeated calls return identical results.
- `help` lists commands. `health` returns `ok`.";

/// MCP server wrapper around the holding-invoice control plane.
#[derive(Clone)]
pub struct HoldMcp {
    tool_router: ToolRouter<Self>,
    control: HoldControlPlane,
}

impl HoldMcp {
    /// Creates a new server over a shared control plane.
    #[must_use]
    pub fn new(control: HoldControlPlane) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_invoices()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }

    #[must_use]
    pub const fn control(&self) -> &HoldControlPlane {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl HoldMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for HoldMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
