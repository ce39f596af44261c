use crate::chart::render_bar_chart;
use crate::core::{calculate_metrics, group_and_sum, top_products, FilterDomain, FilterSet};
use crate::error::{BoardError, BoardResult};
use crate::format::{format_currency, format_quantity, CURRENCY_SYMBOL};
use crate::loader::load_table;
use crate::types::{GroupColumn, GroupTotals, SalesMetrics, SalesTable};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;

/// Execute the report command: metric cards plus the three dashboards.
pub fn report(data: PathBuf, filters: FilterSet, verbose: bool) -> BoardResult<()> {
    println!("{}", "📊 Salesboard - Sales Report".bold().green());
    println!("   Data: {}", data.display());
    println!("   Filters: {}", filters.describe().bright_yellow());
    println!();

    let table = load_for_display(&data, verbose)?;
    print_report(&table, &filters);
    Ok(())
}

/// Execute the metrics command: the five metric cards only.
pub fn metrics(data: PathBuf, filters: FilterSet, verbose: bool) -> BoardResult<()> {
    println!("{}", "📐 Salesboard - Metrics".bold().green());
    println!("   Data: {}", data.display());
    println!("   Filters: {}", filters.describe().bright_yellow());
    println!();

    let table = load_for_display(&data, verbose)?;
    let filtered = filters.apply(&table);
    let bundle = calculate_metrics(&filtered);

    println!("{}", metric_cards(&bundle));
    Ok(())
}

/// Execute the breakdown command: grouped totals for one categorical column.
pub fn breakdown(data: PathBuf, column: String, filters: FilterSet, verbose: bool) -> BoardResult<()> {
    let column: GroupColumn = column.parse()?;

    println!("{}", "📊 Salesboard - Breakdown".bold().green());
    println!("   Data: {}", data.display());
    println!("   Column: {}", column.to_string().bright_blue().bold());
    println!("   Filters: {}", filters.describe().bright_yellow());
    println!();

    let table = load_for_display(&data, verbose)?;
    let filtered = filters.apply(&table);
    let groups = group_and_sum(&filtered, column);

    println!("{}", breakdown_table(column, &groups));
    println!();
    print!(
        "{}",
        render_bar_chart(&format!("Vendas por {}", column.label()), &group_chart_rows(&groups))
    );
    Ok(())
}

/// Execute the top command: the best-selling products ranking.
pub fn top(data: PathBuf, limit: usize, filters: FilterSet, verbose: bool) -> BoardResult<()> {
    println!("{}", "🏆 Salesboard - Top Products".bold().green());
    println!("   Data: {}", data.display());
    println!("   Filters: {}", filters.describe().bright_yellow());
    println!();

    let table = load_for_display(&data, verbose)?;
    let filtered = filters.apply(&table);
    let ranked = top_products(&filtered, limit);

    let rows: Vec<(String, rust_decimal::Decimal)> = ranked
        .into_iter()
        .map(|r| (r.product, r.value))
        .collect();
    print!(
        "{}",
        render_bar_chart(&format!("Top {limit} Produtos Mais Vendidos"), &rows)
    );
    Ok(())
}

/// Execute the filters command: the distinct values of each filterable
/// column, in ledger order. This is what a selection widget offers.
pub fn filters(data: PathBuf) -> BoardResult<()> {
    println!("{}", "🔍 Salesboard - Filter Values".bold().green());
    println!("   Data: {}\n", data.display());

    let table = load_for_display(&data, false)?;
    let domain = FilterDomain::of(&table);

    print_domain("Vendedor", &domain.salespeople);
    print_domain("Mes", &domain.months);
    print_domain(
        "Ano",
        &domain.years.iter().map(ToString::to_string).collect::<Vec<_>>(),
    );
    print_domain("Situacao", &domain.statuses);
    Ok(())
}

/// Execute the watch command: re-render the report whenever the ledger file
/// changes on disk.
pub fn watch(data: PathBuf, filters: FilterSet, verbose: bool) -> BoardResult<()> {
    println!("{}", "👁️  Salesboard - Watch Mode".bold().green());
    println!("   Watching: {}", data.display());
    println!("   Filters: {}", filters.describe().bright_yellow());
    println!("   Press {} to stop\n", "Ctrl+C".bold().yellow());

    if !data.exists() {
        return Err(BoardError::NotFound(data.display().to_string()));
    }

    let canonical_path = data.canonicalize().map_err(BoardError::Io)?;
    let parent_dir = canonical_path
        .parent()
        .ok_or_else(|| BoardError::InvalidArgument("cannot determine parent directory".to_string()))?;

    let (tx, rx) = channel();

    // Debounce so one editor save does not trigger several passes.
    let mut debouncer = new_debouncer(Duration::from_millis(200), tx)
        .map_err(|e| BoardError::Io(std::io::Error::other(e)))?;

    debouncer
        .watcher()
        .watch(parent_dir, RecursiveMode::NonRecursive)
        .map_err(|e| BoardError::Io(std::io::Error::other(e)))?;

    if verbose {
        println!(
            "   {} {}",
            "Watching directory:".cyan(),
            parent_dir.display()
        );
    }

    println!("{}", "🔄 Initial run...".cyan());
    run_watch_pass(&data, &filters, verbose);
    println!();

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|event| {
                    if event.kind != DebouncedEventKind::Any {
                        return false;
                    }
                    if let Ok(event_canonical) = event.path.canonicalize() {
                        if event_canonical == canonical_path {
                            return true;
                        }
                    }
                    if let Some(filename) = event.path.file_name() {
                        if let Some(our_filename) = canonical_path.file_name() {
                            if filename == our_filename {
                                return true;
                            }
                        }
                        if let Some(name_str) = filename.to_str() {
                            if name_str.ends_with(".csv") {
                                return true;
                            }
                        }
                    }
                    false
                });

                if relevant {
                    println!(
                        "\n{} {}",
                        "🔄 Change detected at".cyan(),
                        timestamp().cyan()
                    );
                    run_watch_pass(&data, &filters, verbose);
                    println!();
                }
            }
            Ok(Err(error)) => {
                eprintln!("{} Watch error: {}", "❌".red(), error);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

/// One render pass of watch mode. Failures are reported and the watch loop
/// keeps running; the next save gets a fresh chance.
fn run_watch_pass(path: &Path, filters: &FilterSet, verbose: bool) {
    match load_for_display(path, verbose) {
        Ok(table) => print_report(&table, filters),
        Err(e) => eprintln!("{} {}", "❌".red(), e),
    }
}

//==============================================================================
// Shared rendering
//==============================================================================

/// Load the ledger and surface emptiness as a user-visible warning, not an
/// error.
fn load_for_display(path: &Path, verbose: bool) -> BoardResult<SalesTable> {
    if verbose {
        println!("{}", "📖 Loading sales ledger...".cyan());
    }

    let table = load_table(path)?;

    if verbose {
        println!("   {} line items\n", table.len());
    }
    if table.is_empty() {
        println!(
            "{}",
            "⚠️  The ledger has no data rows. Metrics and charts will be empty.".yellow()
        );
        println!();
    }
    Ok(table)
}

/// Full render cycle: filter, metrics, and the three bar charts.
fn print_report(table: &SalesTable, filters: &FilterSet) {
    debug!(rows = table.len(), filters = %filters.describe(), "render pass");
    let filtered = filters.apply(table);
    let bundle = calculate_metrics(&filtered);

    println!("{}", metric_cards(&bundle));
    println!();

    let by_line = group_and_sum(&filtered, GroupColumn::ProductLine);
    print!(
        "{}",
        render_bar_chart("Vendas por Linha de Produto", &group_chart_rows(&by_line))
    );
    println!();

    let by_salesperson = group_and_sum(&filtered, GroupColumn::Salesperson);
    print!(
        "{}",
        render_bar_chart("Vendas por Vendedor", &group_chart_rows(&by_salesperson))
    );
    println!();

    let ranked: Vec<(String, rust_decimal::Decimal)> = top_products(&filtered, 10)
        .into_iter()
        .map(|r| (r.product, r.value))
        .collect();
    print!(
        "{}",
        render_bar_chart("Top 10 Produtos Mais Vendidos", &ranked)
    );
}

/// The five labeled metric cards as a terminal table.
fn metric_cards(bundle: &SalesMetrics) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metrica", "Valor"]);
    table.add_row(vec![
        Cell::new("Total de Notas"),
        Cell::new(bundle.invoices).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Total de Produtos"),
        Cell::new(format_quantity(bundle.quantity)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Faturamento Total"),
        Cell::new(format_currency(bundle.value, CURRENCY_SYMBOL))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Custo Total"),
        Cell::new(format_currency(bundle.cost, CURRENCY_SYMBOL))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Lucro Total"),
        Cell::new(format_currency(bundle.profit, CURRENCY_SYMBOL))
            .set_alignment(CellAlignment::Right),
    ]);
    table
}

/// Grouped totals as a terminal table, one row per group key.
fn breakdown_table(column: GroupColumn, groups: &[GroupTotals]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![column.label(), "Valor Total", "Custo", "Lucro"]);
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.key),
            Cell::new(format_currency(group.value, CURRENCY_SYMBOL))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_currency(group.cost, CURRENCY_SYMBOL))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_currency(group.profit, CURRENCY_SYMBOL))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn group_chart_rows(groups: &[GroupTotals]) -> Vec<(String, rust_decimal::Decimal)> {
    groups
        .iter()
        .map(|g| (g.key.clone(), g.value))
        .collect()
}

fn print_domain(label: &str, values: &[String]) {
    println!("   {} ({})", label.bright_blue().bold(), values.len());
    for value in values {
        println!("      {value}");
    }
    println!();
}

fn timestamp() -> String {
    chrono::Utc::now().format("%H:%M:%S UTC").to_string()
}
