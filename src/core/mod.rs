//! Core analytics: filtering, summary metrics and aggregation.

pub mod aggregate;
pub mod filter;
pub mod metrics;

pub use aggregate::{group_and_sum, top_products};
pub use filter::{FilterDomain, FilterSet};
pub use metrics::calculate_metrics;
