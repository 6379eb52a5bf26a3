//! Carrier module: configurations, actions, the graph model, and edge ingestion.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod config;
pub mod graph;
pub mod ingest;
