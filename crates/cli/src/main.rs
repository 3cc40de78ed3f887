//! Command Line Interface for the DLMM Liquidity Provider.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dlmm_lp_data::{PortfolioLoader, SnapshotSource};
use dlmm_lp_domain::config::EngineConfig;
use dlmm_lp_domain::entities::{PoolInfo, Position};
use dlmm_lp_domain::math::bin_price::{bin_id_to_price, bin_step_to_fee_tier};
use dlmm_lp_domain::metrics::{
    PositionMetrics, calculate_impermanent_loss, calculate_portfolio_summary,
    calculate_price_impact,
};
use dotenv::dotenv;
use prettytable::{Table, row};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "dlmm-lp")]
#[command(about = "DLMM Liquidity Provider position analytics CLI", long_about = None)]
struct Cli {
    /// Snapshot of decoded pool and position accounts (JSON)
    #[arg(long, env = "DLMM_SNAPSHOT", global = true)]
    snapshot: Option<PathBuf>,

    /// APY (percent) below which an in-range position is flagged
    #[arg(long, env = "DLMM_LOW_YIELD_THRESHOLD", global = true)]
    low_yield_threshold: Option<Decimal>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize every position owned by a wallet
    Portfolio {
        /// Owner wallet address
        #[arg(short, long)]
        owner: String,
    },
    /// Show details for a single position
    Position {
        /// Position address
        #[arg(short, long)]
        address: String,

        /// Entry price used to estimate impermanent loss
        #[arg(long)]
        entry_price: Option<Decimal>,
    },
    /// Show pool information
    Pool {
        /// Pool address
        #[arg(short, long)]
        address: String,
    },
    /// Convert a bin index to its price
    BinPrice {
        /// Bin index
        #[arg(long, allow_negative_numbers = true)]
        bin_id: i32,

        /// Bin step in basis points
        #[arg(long)]
        bin_step: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = EngineConfig::default();
    if let Some(threshold) = cli.low_yield_threshold {
        config = config.with_low_yield_threshold(threshold);
    }
    let now = chrono::Utc::now().timestamp();

    match &cli.command {
        Commands::BinPrice { bin_id, bin_step } => {
            let price = bin_id_to_price(*bin_id, *bin_step);
            println!("Bin {bin_id} @ {bin_step} bps");
            println!("Price:    {}", price.value);
            println!("Fee tier: {}%", bin_step_to_fee_tier(*bin_step));
        }
        Commands::Portfolio { owner } => {
            let loader = open_loader(cli.snapshot.as_ref()).await?;
            let positions = loader.load_positions(owner, now).await?;
            print_portfolio(owner, &positions, &config, now);
        }
        Commands::Position {
            address,
            entry_price,
        } => {
            let loader = open_loader(cli.snapshot.as_ref()).await?;
            let Some(position) = loader.load_position(address, now).await? else {
                println!("Position {address} not found.");
                return Ok(());
            };
            print_position(&position, &config, now, *entry_price);
        }
        Commands::Pool { address } => {
            let loader = open_loader(cli.snapshot.as_ref()).await?;
            let pool = loader.load_pool(address).await?;
            print_pool(&pool);
        }
    }

    Ok(())
}

async fn open_loader(snapshot: Option<&PathBuf>) -> Result<PortfolioLoader> {
    let path = snapshot.context("A snapshot is required: pass --snapshot or set DLMM_SNAPSHOT")?;
    info!(path = %path.display(), "Opening snapshot");
    let source = SnapshotSource::load(path).await?;
    Ok(PortfolioLoader::new(Arc::new(source)))
}

fn print_portfolio(owner: &str, positions: &[Position], config: &EngineConfig, now: i64) {
    let summary = calculate_portfolio_summary(positions);

    println!("\nPortfolio {owner}");
    println!("════════════════════════════════════");
    println!("Positions:        {}", positions.len());
    println!("Active (in range):{}", summary.active_positions);
    println!("Total Value:      ${:.2}", summary.total_value);
    println!("Fees Earned:      ${:.2}", summary.total_fees_earned);
    println!("Average APY:      {:.1}%", summary.average_apy);
    println!("════════════════════════════════════");

    if positions.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.add_row(row![
        "Position", "Pair", "Range", "Value", "Fees", "APY", "Health", "Status"
    ]);
    for position in positions {
        let metrics = PositionMetrics::compute(position, config, now);
        table.add_row(row![
            position.address,
            format!("{}/{}", position.token_x.symbol, position.token_y.symbol),
            format!(
                "{:.4} - {:.4}",
                position.min_price.value, position.max_price.value
            ),
            format!("${:.2}", position.total_value),
            format!("${:.2}", position.fees_earned),
            format!("{:.1}%", position.estimated_apy),
            metrics.health_score,
            metrics.status
        ]);
    }
    table.printstd();
}

fn print_position(
    position: &Position,
    config: &EngineConfig,
    now: i64,
    entry_price: Option<Decimal>,
) {
    let metrics = PositionMetrics::compute(position, config, now);

    println!(
        "\nPosition {} ({}/{})",
        position.address, position.token_x.symbol, position.token_y.symbol
    );
    println!("════════════════════════════════════");
    println!("Pool:            {}", position.pool_address);
    println!(
        "Status:          {} ({})",
        metrics.status,
        metrics.status.message()
    );
    println!("Health:          {}/100", metrics.health_score);
    println!(
        "Range:           {:.6} - {:.6}",
        position.min_price.value, position.max_price.value
    );
    println!("Current Price:   {:.6}", position.current_price.value);
    println!(
        "Liquidity:       {} {} + {} {}",
        position.liquidity_x, position.token_x.symbol, position.liquidity_y, position.token_y.symbol
    );
    println!("Total Value:     ${:.2}", position.total_value);
    println!(
        "Unclaimed Fees:  {} {} + {} {} (${:.2})",
        position.unclaimed_fees.token_x,
        position.token_x.symbol,
        position.unclaimed_fees.token_y,
        position.token_y.symbol,
        position.unclaimed_fees.total_usd
    );
    println!("Daily Fees:      ${:.2}", metrics.daily_fees);
    println!("Estimated APY:   {:.1}%", position.estimated_apy);
    println!("Concentration:   {:.2} (HHI)", metrics.liquidity_concentration);
    println!("Created:         {}", position.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(entry) = entry_price {
        let il = calculate_impermanent_loss(entry, position.current_price.value);
        let moved = calculate_price_impact(entry, position.current_price.value);
        println!("Price Move:      {moved:.2}% since entry at {entry}");
        println!("Impermanent Loss:{il:.2}%");
    }
    println!("════════════════════════════════════");

    if position.active_bins.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["Bin", "Price", "X", "Y", "Liquidity"]);
    for bin in &position.active_bins {
        table.add_row(row![
            bin.bin_id,
            format!("{:.6}", bin.price.value),
            bin.liquidity_x,
            bin.liquidity_y,
            format!("{:.2}", bin.total_liquidity)
        ]);
    }
    table.printstd();
}

fn print_pool(pool: &PoolInfo) {
    println!(
        "\nPool {} ({}/{})",
        pool.address, pool.token_x.symbol, pool.token_y.symbol
    );
    println!("════════════════════════════════════");
    println!("Active Bin:      {}", pool.active_id);
    println!("Bin Step:        {} bps", pool.bin_step);
    println!("Fee Tier:        {}%", pool.fee_tier);
    println!("Current Price:   {:.6}", pool.current_price.value);
    println!("Liquidity:       ${:.2}", pool.total_liquidity);
    println!("Volume 24h:      ${:.2}", pool.volume_24h);
    println!("Active Bins:     {}", pool.active_bins);
    println!("════════════════════════════════════");
}
