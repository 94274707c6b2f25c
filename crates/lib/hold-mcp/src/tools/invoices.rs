use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{HoldMcp, helpers};

/// Parameters for fetching one invoice's holding reason.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetHoldingReasonDetailParams {
    /// Invoice id to look up (e.g. INV-001). Matched exactly.
    pub invoice_id: String,
}

#[tool_router(router = tool_router_invoices, vis = "pub")]
impl HoldMcp {
    #[tool(description = "List all invoices currently on hold with their id, status, and holding reason.")]
    async fn list_holding_invoices(&self) -> Result<CallToolResult, ErrorData> {
        let invoices = self.control.list_holding_invoices();
        Ok(CallToolResult::success(vec![Content::json(invoices)?]))
    }

    #[tool(description = "Get the detailed holding reason and policy search keywords for one invoice. Unknown ids return an error listing the available ids.")]
    async fn get_holding_reason_detail(
        &self,
        Parameters(params): Parameters<GetHoldingReasonDetailParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.control.get_holding_reason_detail(&params.invoice_id) {
            Ok(detail) => Ok(CallToolResult::success(vec![Content::json(detail)?])),
            Err(err) => helpers::not_found_result(&err),
        }
    }

    #[tool(description = "Get the detailed holding reasons for every held invoice. Prefer get_holding_reason_detail when only one invoice is needed.")]
    async fn get_all_holding_reason_details(&self) -> Result<CallToolResult, ErrorData> {
        let details = self.control.get_all_holding_reason_details();
        Ok(CallToolResult::success(vec![Content::json(details)?]))
    }

    #[tool(description = "Get holding invoice statistics: total, distribution by reason, and the most common reason.")]
    async fn get_invoice_statistics(&self) -> Result<CallToolResult, ErrorData> {
        let statistics = self.control.get_invoice_statistics();
        Ok(CallToolResult::success(vec![Content::json(statistics)?]))
    }
}

#[cfg(test)]
mod tests {
    use hold_core::control::HoldControlPlane;
    use hold_store::{
        HoldingDataset,
        HoldingInvoice,
        HoldingReasonDetail,
        InvoiceNotFound,
        InvoiceStatistics,
    };
    use serde::de::DeserializeOwned;

    use super::*;

    fn seeded() -> HoldMcp {
        let dataset = HoldingDataset::seed().expect("seed should load");
        HoldMcp::new(HoldControlPlane::from_dataset(dataset))
    }

    fn payload<T: DeserializeOwned>(result: &CallToolResult) -> T {
        let text = result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.clone())
            .expect("tool result should carry a text payload");
        serde_json::from_str(&text).unwrap_or_else(|err| panic!("bad payload {text}: {err}"))
    }

    fn detail_params(invoice_id: &str) -> Parameters<GetHoldingReasonDetailParams> {
        Parameters(GetHoldingReasonDetailParams {
            invoice_id: invoice_id.to_string(),
        })
    }

    #[tokio::test]
    async fn list_tool_returns_seed_invoices() {
        let mcp = seeded();

        let result = mcp.list_holding_invoices().await.expect("tool should succeed");
        let invoices: Vec<HoldingInvoice> = payload(&result);

        assert_ne!(result.is_error, Some(true));
        assert_eq!(invoices.len(), 10);
        assert_eq!(invoices[0].id, "INV-001");
    }

    #[tokio::test]
    async fn detail_tool_returns_detail() {
        let mcp = seeded();

        let result = mcp
            .get_holding_reason_detail(detail_params("INV-001"))
            .await
            .expect("tool should succeed");
        let detail: HoldingReasonDetail = payload(&result);

        assert_ne!(result.is_error, Some(true));
        assert_eq!(detail.invoice_id, "INV-001");
        assert_eq!(detail.reason, "발주금액 불일치");
    }

    #[tokio::test]
    async fn detail_tool_reports_structured_not_found() {
        let mcp = seeded();

        let result = mcp
            .get_holding_reason_detail(detail_params("INV-999"))
            .await
            .expect("not found is a tool result, not a protocol error");
        let not_found: InvoiceNotFound = payload(&result);

        assert_eq!(result.is_error, Some(true));
        assert_eq!(not_found.invoice_id, "INV-999");
        assert_eq!(not_found.available_ids.len(), 10);
        assert!(not_found.error.contains("INV-999"));
    }

    #[tokio::test]
    async fn all_details_and_statistics_tools() {
        let mcp = seeded();

        let details: Vec<HoldingReasonDetail> = payload(
            &mcp.get_all_holding_reason_details()
                .await
                .expect("tool should succeed"),
        );
        let stats: InvoiceStatistics = payload(
            &mcp.get_invoice_statistics()
                .await
                .expect("tool should succeed"),
        );

        assert_eq!(details.len(), 10);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.unique_reasons, 10);
        assert_eq!(stats.most_common_count, 1);
    }
}
