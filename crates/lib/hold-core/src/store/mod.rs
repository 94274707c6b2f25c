//! Record store for holding invoices.
//!
//! The store is built once from a dataset and never mutated, so it can be
//! shared across tasks behind an `Arc` without locking.

pub mod memory;

pub use memory::MemoryHoldStore;
