//! MCP tool modules.
//!
//! Tools are grouped by domain: holding invoice queries and contextual help.

pub mod invoices;
mod context;
