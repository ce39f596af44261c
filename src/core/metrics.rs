//! Reduction of a table snapshot to the five headline metrics.

use crate::types::{SalesMetrics, SalesTable};
use std::collections::HashSet;

/// Compute the metric bundle for one table snapshot.
///
/// The invoice count is the number of distinct invoice numbers, not the row
/// count. All sums are exact decimal arithmetic. An empty table yields the
/// zeroed bundle.
#[must_use]
pub fn calculate_metrics(table: &SalesTable) -> SalesMetrics {
    let mut metrics = SalesMetrics::new();
    let mut invoices: HashSet<&str> = HashSet::new();

    for record in table.iter() {
        invoices.insert(record.invoice.as_str());
        metrics.quantity += record.quantity;
        metrics.value += record.value;
        metrics.cost += record.cost;
        metrics.profit += record.profit;
    }

    metrics.invoices = invoices.len();
    metrics
}
