//! Core services for hold-mcp.
//!
//! This crate owns the in-memory record store built from a validated
//! dataset and the control plane that answers the four holding-invoice
//! queries on top of it.

pub mod control;
pub mod store;
