use crate::error::BoardError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Sales Records
//==============================================================================

/// One line item of the sales ledger.
///
/// The `rename` attributes map the dataset's native CSV headers onto the
/// record fields. Monetary columns and the quantity deserialize from the raw
/// field text straight into `Decimal`, never through a float.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    /// Invoice number. One invoice may span several line items.
    #[serde(rename = "NF")]
    pub invoice: String,

    #[serde(rename = "Descricao_produto")]
    pub product: String,

    #[serde(rename = "Linha")]
    pub product_line: String,

    #[serde(rename = "Vendedor")]
    pub salesperson: String,

    #[serde(rename = "Mes")]
    pub month: String,

    #[serde(rename = "Ano")]
    pub year: i32,

    #[serde(rename = "situacao")]
    pub status: String,

    #[serde(
        rename = "Qtd_Produto",
        deserialize_with = "rust_decimal::serde::str::deserialize"
    )]
    pub quantity: Decimal,

    #[serde(
        rename = "Valor_Total_Item",
        deserialize_with = "rust_decimal::serde::str::deserialize"
    )]
    pub value: Decimal,

    #[serde(
        rename = "Total_Custo_Compra",
        deserialize_with = "rust_decimal::serde::str::deserialize"
    )]
    pub cost: Decimal,

    #[serde(
        rename = "Total_Lucro_Venda_Item",
        deserialize_with = "rust_decimal::serde::str::deserialize"
    )]
    pub profit: Decimal,
}

/// An ordered, immutable snapshot of sales records sharing one schema.
///
/// Filtering and aggregation borrow a table and produce new tables or
/// summary values; the loaded table itself is never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    #[must_use]
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }
}

impl FromIterator<SalesRecord> for SalesTable {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//==============================================================================
// Derived Summaries
//==============================================================================

/// The five headline numbers shown as metric cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesMetrics {
    /// Count of distinct invoice numbers, not of line items.
    pub invoices: usize,
    pub quantity: Decimal,
    pub value: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
}

impl SalesMetrics {
    /// A zeroed-out bundle, the result for an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            invoices: 0,
            quantity: Decimal::ZERO,
            value: Decimal::ZERO,
            cost: Decimal::ZERO,
            profit: Decimal::ZERO,
        }
    }
}

impl Default for SalesMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Summed value/cost/profit for one distinct group key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub key: String,
    pub value: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
}

impl GroupTotals {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self {
            key,
            value: Decimal::ZERO,
            cost: Decimal::ZERO,
            profit: Decimal::ZERO,
        }
    }
}

/// One entry of the top products ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRank {
    pub product: String,
    pub value: Decimal,
}

//==============================================================================
// Group Columns
//==============================================================================

/// Categorical columns a breakdown can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    ProductLine,
    Salesperson,
    Month,
    Year,
    Status,
}

impl GroupColumn {
    pub const ALL: [GroupColumn; 5] = [
        GroupColumn::ProductLine,
        GroupColumn::Salesperson,
        GroupColumn::Month,
        GroupColumn::Year,
        GroupColumn::Status,
    ];

    /// The grouping key of one record under this column.
    pub fn key_of(&self, record: &SalesRecord) -> String {
        match self {
            GroupColumn::ProductLine => record.product_line.clone(),
            GroupColumn::Salesperson => record.salesperson.clone(),
            GroupColumn::Month => record.month.clone(),
            GroupColumn::Year => record.year.to_string(),
            GroupColumn::Status => record.status.clone(),
        }
    }

    /// The dataset's header name, used as the category axis label.
    pub fn label(&self) -> &'static str {
        match self {
            GroupColumn::ProductLine => "Linha",
            GroupColumn::Salesperson => "Vendedor",
            GroupColumn::Month => "Mes",
            GroupColumn::Year => "Ano",
            GroupColumn::Status => "Situacao",
        }
    }

    /// The CLI-facing column name.
    pub fn cli_name(&self) -> &'static str {
        match self {
            GroupColumn::ProductLine => "product-line",
            GroupColumn::Salesperson => "salesperson",
            GroupColumn::Month => "month",
            GroupColumn::Year => "year",
            GroupColumn::Status => "status",
        }
    }
}

impl fmt::Display for GroupColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for GroupColumn {
    type Err = BoardError;

    /// Accepts the CLI name of a column, plus the dataset's own header
    /// spelling as an alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product-line" | "line" | "linha" => Ok(GroupColumn::ProductLine),
            "salesperson" | "seller" | "vendedor" => Ok(GroupColumn::Salesperson),
            "month" | "mes" => Ok(GroupColumn::Month),
            "year" | "ano" => Ok(GroupColumn::Year),
            "status" | "situacao" => Ok(GroupColumn::Status),
            other => Err(BoardError::InvalidArgument(format!(
                "unknown group column '{other}'. Available: product-line, salesperson, month, year, status"
            ))),
        }
    }
}
