//! Equality filters over the filterable ledger columns.

use crate::types::{SalesRecord, SalesTable};

/// The user's filter selections, one per filterable column.
///
/// `None` is the "all" sentinel: that column imposes no restriction. A
/// fully-unconstrained set is an identity over any table. Selections compose
/// as a logical AND; a value absent from the column's domain simply matches
/// zero rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub salesperson: Option<String>,
    pub month: Option<String>,
    pub year: Option<i32>,
    pub status: Option<String>,
}

impl FilterSet {
    /// The unconstrained set: every column on "all".
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.salesperson.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.status.is_none()
    }

    fn matches(&self, record: &SalesRecord) -> bool {
        if let Some(ref salesperson) = self.salesperson {
            if record.salesperson != *salesperson {
                return false;
            }
        }
        if let Some(ref month) = self.month {
            if record.month != *month {
                return false;
            }
        }
        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }
        if let Some(ref status) = self.status {
            if record.status != *status {
                return false;
            }
        }
        true
    }

    /// Retain the rows matching every constrained column, preserving the
    /// input order. An empty result is a valid table.
    #[must_use]
    pub fn apply(&self, table: &SalesTable) -> SalesTable {
        if self.is_unconstrained() {
            return table.clone();
        }
        table
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    /// Human-readable summary of the active selections.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref v) = self.salesperson {
            parts.push(format!("salesperson={v}"));
        }
        if let Some(ref v) = self.month {
            parts.push(format!("month={v}"));
        }
        if let Some(v) = self.year {
            parts.push(format!("year={v}"));
        }
        if let Some(ref v) = self.status {
            parts.push(format!("status={v}"));
        }
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// The distinct values of each filterable column, in first-appearance order.
///
/// This is what a selection widget offers, ahead of the "all" sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDomain {
    pub salespeople: Vec<String>,
    pub months: Vec<String>,
    pub years: Vec<i32>,
    pub statuses: Vec<String>,
}

impl FilterDomain {
    #[must_use]
    pub fn of(table: &SalesTable) -> Self {
        let mut domain = Self::default();
        for record in table.iter() {
            push_distinct(&mut domain.salespeople, &record.salesperson);
            push_distinct(&mut domain.months, &record.month);
            if !domain.years.contains(&record.year) {
                domain.years.push(record.year);
            }
            push_distinct(&mut domain.statuses, &record.status);
        }
        domain
    }
}

fn push_distinct(values: &mut Vec<String>, candidate: &str) {
    if !values.iter().any(|v| v == candidate) {
        values.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SalesRecord;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn record(invoice: &str, salesperson: &str, month: &str, year: i32) -> SalesRecord {
        SalesRecord {
            invoice: invoice.to_string(),
            product: "Dipirona 500mg".to_string(),
            product_line: "Farmacia".to_string(),
            salesperson: salesperson.to_string(),
            month: month.to_string(),
            year,
            status: "Faturado".to_string(),
            quantity: dec!(1),
            value: dec!(10.00),
            cost: dec!(6.00),
            profit: dec!(4.00),
        }
    }

    fn sample_table() -> SalesTable {
        SalesTable::new(vec![
            record("1", "Ana", "1", 2024),
            record("2", "Bruno", "1", 2024),
            record("3", "Ana", "2", 2024),
            record("4", "Carla", "2", 2023),
            record("5", "Ana", "3", 2023),
        ])
    }

    #[test]
    fn test_unconstrained_filter_is_identity() {
        let table = sample_table();
        let filtered = FilterSet::all().apply(&table);
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_single_column_filter_preserves_order() {
        let table = sample_table();
        let filters = FilterSet {
            salesperson: Some("Ana".to_string()),
            ..FilterSet::all()
        };

        let filtered = filters.apply(&table);
        let invoices: Vec<&str> = filtered.iter().map(|r| r.invoice.as_str()).collect();
        assert_eq!(invoices, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_filters_compose_as_and() {
        let table = sample_table();
        let filters = FilterSet {
            salesperson: Some("Ana".to_string()),
            year: Some(2023),
            ..FilterSet::all()
        };

        let filtered = filters.apply(&table);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].invoice, "5");
    }

    #[test]
    fn test_unknown_selection_yields_empty_table() {
        let table = sample_table();
        let filters = FilterSet {
            salesperson: Some("Nobody".to_string()),
            ..FilterSet::all()
        };

        let filtered = filters.apply(&table);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_domain_keeps_first_appearance_order() {
        let domain = FilterDomain::of(&sample_table());
        assert_eq!(domain.salespeople, vec!["Ana", "Bruno", "Carla"]);
        assert_eq!(domain.months, vec!["1", "2", "3"]);
        assert_eq!(domain.years, vec![2024, 2023]);
        assert_eq!(domain.statuses, vec!["Faturado"]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(FilterSet::all().describe(), "all");

        let filters = FilterSet {
            salesperson: Some("Ana".to_string()),
            year: Some(2024),
            ..FilterSet::all()
        };
        assert_eq!(filters.describe(), "salesperson=Ana, year=2024");
    }
}
