//! Holding invoice models and seed data for hold-mcp.
//!
//! This crate defines the wire-level records shared by the query layer, the
//! MCP tools, and the REST surface, along with the embedded seed dataset and
//! its structural checks.

pub mod models;
pub mod schema;
pub mod seed;

pub use models::*;
pub use seed::{DatasetError, HoldingDataset};
