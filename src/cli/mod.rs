//! CLI command handlers

pub mod commands;

pub use commands::{breakdown, filters, metrics, report, top, watch};
