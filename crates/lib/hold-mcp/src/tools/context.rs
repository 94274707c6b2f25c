use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::HoldMcp;

/// Payload listing the MCP commands exposed by this server.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands exposed by this server.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "list_holding_invoices - List all held invoices with id, status, and reason."
                    .to_string(),
                "get_holding_reason_detail - Detailed reason and search keywords for one invoice (invoice_id)."
                    .to_string(),
                "get_all_holding_reason_details - Detailed reasons for every held invoice."
                    .to_string(),
                "get_invoice_statistics - Totals and distribution of holding reasons."
                    .to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl HoldMcp {
    #[tool(description = "List the MCP commands exposed by this server.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
