use clap::{Args, Parser, Subcommand};
use salesboard::cli;
use salesboard::core::FilterSet;
use salesboard::error::BoardResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "Sales analytics for the terminal: filters, metrics and bar charts.")]
#[command(long_about = "Salesboard - Sales analytics for the terminal

Loads a CSV sales ledger, applies equality filters and renders summary
metrics plus bar charts, straight to your terminal.

COMMANDS:
  report     - Full dashboard: metric cards + three bar charts
  metrics    - The five headline metrics only
  breakdown  - Grouped totals for one categorical column
  top        - Best-selling products ranking
  filters    - Distinct values available for each filter
  watch      - Re-render the report whenever the ledger changes

FILTERS:
  Every reporting command takes --salesperson, --month, --year and --status.
  An omitted flag means 'all'; filters combine as a logical AND.

EXAMPLES:
  salesboard report                                # everything
  salesboard report -s Ana -y 2024                 # one seller, one year
  salesboard breakdown salesperson --status Faturado
  salesboard top --limit 5
  salesboard watch --data vendas.csv

Docs: https://github.com/royalbit/salesboard")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Path to the sales ledger CSV
    #[arg(long, default_value = "vendas.csv", env = "SALESBOARD_DATA")]
    data: PathBuf,
}

#[derive(Args)]
struct FilterArgs {
    /// Keep only rows for this salesperson
    #[arg(short = 's', long)]
    salesperson: Option<String>,

    /// Keep only rows for this month, as recorded in the ledger
    #[arg(short = 'm', long)]
    month: Option<String>,

    /// Keep only rows for this year
    #[arg(short = 'y', long)]
    year: Option<i32>,

    /// Keep only rows with this status
    #[arg(long)]
    status: Option<String>,
}

impl From<FilterArgs> for FilterSet {
    fn from(args: FilterArgs) -> Self {
        FilterSet {
            salesperson: args.salesperson,
            month: args.month,
            year: args.year,
            status: args.status,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Render the full dashboard.

Applies the filter flags, then prints the five metric cards (distinct
invoices, units sold, revenue, cost, profit) followed by three bar charts:
sales by product line, sales by salesperson, and the top 10 products.

An empty result set is rendered as zeroed cards and empty charts, with a
warning when the ledger itself has no rows.")]
    /// Full dashboard: metric cards + three bar charts
    Report {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Show loading steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// The five headline metrics only
    Metrics {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Show loading steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Group the ledger by one categorical column and sum
value, cost and profit per group.

COLUMNS:
  product-line | salesperson | month | year | status

The dataset's own header spellings (Linha, Vendedor, Mes, Ano, situacao)
are accepted as aliases. Output is a table plus a bar chart, sorted by
group key.")]
    /// Grouped totals for one categorical column
    Breakdown {
        /// Column to group by (e.g. product-line, salesperson)
        column: String,

        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Show loading steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Best-selling products by summed item value
    Top {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// How many products to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Show loading steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Distinct values available for each filterable column
    Filters {
        #[command(flatten)]
        data: DataArgs,
    },

    #[command(long_about = "Watch the ledger file and re-render on changes.

Monitors the CSV for writes (debounced, so one editor save triggers one
pass) and re-runs the full report with the given filters after each
change. The interactive loop of the dashboard, for the terminal.

Press Ctrl+C to stop watching.")]
    /// Re-render the report whenever the ledger changes
    Watch {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filters: FilterArgs,

        /// Show loading steps
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> BoardResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data,
            filters,
            verbose,
        } => cli::report(data.data, filters.into(), verbose),

        Commands::Metrics {
            data,
            filters,
            verbose,
        } => cli::metrics(data.data, filters.into(), verbose),

        Commands::Breakdown {
            column,
            data,
            filters,
            verbose,
        } => cli::breakdown(data.data, column, filters.into(), verbose),

        Commands::Top {
            data,
            filters,
            limit,
            verbose,
        } => cli::top(data.data, limit, filters.into(), verbose),

        Commands::Filters { data } => cli::filters(data.data),

        Commands::Watch {
            data,
            filters,
            verbose,
        } => cli::watch(data.data, filters.into(), verbose),
    }
}
