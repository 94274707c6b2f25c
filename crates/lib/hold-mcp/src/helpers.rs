use hold_store::InvoiceNotFound;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content};

/// Returns the not-found payload as a tool-level error result so agents can
/// read `available_ids` and retry.
pub(crate) fn not_found_result(err: &InvoiceNotFound) -> Result<CallToolResult, ErrorData> {
    Ok(CallToolResult::error(vec![Content::json(err)?]))
}
