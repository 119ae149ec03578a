use analytics::CurrencyNormalizer;
use anyhow::{Context, Result};
use charts::ChartSpec;
use clap::{Parser, Subcommand};
use configuration::OutputFormat;
use datasets::{DatasetKind, load_records};
use std::path::{Path, PathBuf};

mod plots;
mod report;

/// Configuration file read when `--config` is not given. It may be absent.
const DEFAULT_CONFIG: &str = "charts.toml";

/// The main entry point for the SimCharts application.
fn main() -> Result<()> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let (config_path, required) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG), false),
    };
    let mut settings = configuration::load_settings(&config_path, required)
        .with_context(|| format!("cannot load configuration from {}", config_path.display()))?;

    let _log_guard = configuration::init_logging(&settings.logging)?;

    if let Some(format) = cli.format {
        settings.output.format = format;
    }
    let normalizer = CurrencyNormalizer::new(settings.exchange_rates.to_table()?);

    // Execute the appropriate command
    let (stem, spec) = match cli.command {
        Commands::Sweep(args) => ("sweep", handle_sweep(&args)?),
        Commands::Single(args) => ("single_sim", handle_single(&args, &normalizer)?),
        Commands::Transactions(args) => ("transactions", handle_transactions(&args)?),
        Commands::Wallet(args) => ("wallet", handle_wallet(&args, &normalizer)?),
    };

    tracing::debug!(chart = stem, panels = spec.root.panels().len(), "Chart assembled.");

    let path = cli
        .output
        .unwrap_or_else(|| settings.output.path_for(stem));
    charts::render(&spec, &settings.output, &path)
        .with_context(|| format!("cannot create graph {}", path.display()))?;

    println!("{}", report::summary_table(&charts::summarize(&spec)));
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Renders charts from trade/market simulation output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./charts.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Image file to write, overriding the configured output directory.
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Image encoding, overriding the configured format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mean gain against number of transactions, one line per interest rate.
    Sweep(SweepArgs),
    /// Quantities, gains, payments and holdings of a single simulation run.
    Single(SingleArgs),
    /// Market gain and euros paid per transaction.
    Transactions(TransactionsArgs),
    /// Wallet value in EUR and per-currency quantities over time.
    Wallet(WalletArgs),
}

#[derive(Parser)]
struct SweepArgs {
    /// Simulation sweep document.
    #[arg(long, default_value = DatasetKind::Simulations.default_file_name())]
    input: PathBuf,
}

#[derive(Parser)]
struct SingleArgs {
    #[arg(long, default_value = DatasetKind::Transactions.default_file_name())]
    transactions: PathBuf,

    #[arg(long, default_value = DatasetKind::Market.default_file_name())]
    market: PathBuf,

    #[arg(long, default_value = DatasetKind::Trader.default_file_name())]
    trader: PathBuf,
}

#[derive(Parser)]
struct TransactionsArgs {
    #[arg(long, default_value = DatasetKind::Transactions.default_file_name())]
    input: PathBuf,
}

#[derive(Parser)]
struct WalletArgs {
    /// Wallet history, a bare JSON array of snapshots.
    #[arg(long, default_value = DatasetKind::Wallet.default_file_name())]
    input: PathBuf,

    /// Prefix of the top chart's caption (e.g. the trader's name).
    #[arg(long, default_value = "Trader")]
    caption: String,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_sweep(args: &SweepArgs) -> Result<ChartSpec> {
    let simulations = load(&args.input, DatasetKind::Simulations)?;
    let spec = plots::sweep_chart(&simulations)?.with_title(
        "Market gain doing n transactions with a certain interest, with market refill and refill failure",
    );
    Ok(spec)
}

fn handle_single(args: &SingleArgs, normalizer: &CurrencyNormalizer) -> Result<ChartSpec> {
    let transactions = load(&args.transactions, DatasetKind::Transactions)?;
    let market = load(&args.market, DatasetKind::Market)?;
    let trader = load(&args.trader, DatasetKind::Trader)?;

    Ok(plots::single_chart(&transactions, &market, &trader, normalizer)?)
}

fn handle_transactions(args: &TransactionsArgs) -> Result<ChartSpec> {
    let transactions = load(&args.input, DatasetKind::Transactions)?;
    Ok(plots::transactions_chart(&transactions)?)
}

fn handle_wallet(args: &WalletArgs, normalizer: &CurrencyNormalizer) -> Result<ChartSpec> {
    let wallets = load(&args.input, DatasetKind::Wallet)?;
    Ok(plots::wallet_chart(&wallets, normalizer, &args.caption)?)
}

fn load(path: &Path, kind: DatasetKind) -> Result<Vec<core_types::Record>> {
    load_records(path, kind).with_context(|| format!("cannot load {kind} data from {}", path.display()))
}
