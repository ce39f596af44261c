//! Grouped sums and the top-products ranking.

use crate::types::{GroupColumn, GroupTotals, ProductRank, SalesTable};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Group rows by exact equality on `column` and sum value, cost and profit
/// per group.
///
/// Output is sorted ascending by group key so tables and charts are
/// reproducible across runs.
#[must_use]
pub fn group_and_sum(table: &SalesTable, column: GroupColumn) -> Vec<GroupTotals> {
    let mut totals: HashMap<String, GroupTotals> = HashMap::new();

    for record in table.iter() {
        let key = column.key_of(record);
        let entry = totals
            .entry(key.clone())
            .or_insert_with(|| GroupTotals::new(key));
        entry.value += record.value;
        entry.cost += record.cost;
        entry.profit += record.profit;
    }

    let mut groups: Vec<GroupTotals> = totals.into_values().collect();
    groups.sort_by(|a, b| a.key.cmp(&b.key));
    groups
}

/// The `limit` best-selling products by summed item value, descending.
///
/// Ties are broken ascending by product description. Fewer than `limit`
/// distinct products returns all of them.
#[must_use]
pub fn top_products(table: &SalesTable, limit: usize) -> Vec<ProductRank> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for record in table.iter() {
        *totals.entry(record.product.clone()).or_default() += record.value;
    }

    let mut ranked: Vec<ProductRank> = totals
        .into_iter()
        .map(|(product, value)| ProductRank { product, value })
        .collect();
    ranked.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.product.cmp(&b.product))
    });
    ranked.truncate(limit);
    ranked
}
