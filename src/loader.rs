//! Dataset loader: CSV file to an in-memory [`SalesTable`].

use crate::error::{BoardError, BoardResult};
use crate::types::{SalesRecord, SalesTable};
use std::path::Path;
use tracing::debug;

/// Columns the ledger must carry. Checked against the header row before any
/// record is deserialized, so a malformed schema fails fast with the full
/// list of missing columns.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "NF",
    "Descricao_produto",
    "Linha",
    "Vendedor",
    "Mes",
    "Ano",
    "situacao",
    "Qtd_Produto",
    "Valor_Total_Item",
    "Total_Custo_Compra",
    "Total_Lucro_Venda_Item",
];

/// Load a sales ledger CSV into a [`SalesTable`].
///
/// A file that parses but contains zero data rows loads successfully into an
/// empty table; emptiness is the caller's condition to report, not an error.
///
/// # Arguments
/// * `path` - Path to the CSV file (header row required)
///
/// # Returns
/// * `Ok(SalesTable)` - Parsed table, possibly empty
/// * `Err(BoardError::NotFound)` - The path does not exist
/// * `Err(BoardError::Schema)` - Required columns missing from the header
/// * `Err(BoardError::Csv)` - Malformed rows or unparseable field values
///
/// # Example
/// ```no_run
/// use salesboard::loader::load_table;
/// use std::path::Path;
///
/// let table = load_table(Path::new("vendas.csv"))?;
/// println!("{} line items", table.len());
/// # Ok::<(), salesboard::BoardError>(())
/// ```
pub fn load_table(path: &Path) -> BoardResult<SalesTable> {
    if !path.exists() {
        return Err(BoardError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(BoardError::Schema(format!(
            "{} is missing required columns: {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: SalesRecord = row?;
        records.push(record);
    }

    debug!(rows = records.len(), path = %path.display(), "loaded sales ledger");
    Ok(SalesTable::new(records))
}
