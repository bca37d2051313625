use std::path::PathBuf;

use clap::Parser;
use edgar_insiders::{EdgarClient, ScanBuilder, export};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Collects insider trades from recent SEC Form 4 filings and exports the
/// largest buys and sells to CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of days to look back for filings
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Output CSV file path
    #[arg(long, default_value = "insider_trades.csv")]
    output: PathBuf,

    /// Minimum trade value to include, in USD
    #[arg(long, default_value = "100000")]
    min_value: Decimal,

    /// Only export the top N trades by value
    #[arg(long)]
    top: Option<usize>,

    /// User-Agent sent to EDGAR; SEC asks for "<app> <contact email>"
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut builder = EdgarClient::builder();
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    let client = builder.build()?;

    let report = ScanBuilder::new(&client)
        .window_days(args.days)
        .min_value(args.min_value)
        .limit(args.top)
        .run()
        .await?;

    if report.trades.is_empty() {
        warn!("no trades found matching criteria");
        return Ok(());
    }

    export::export_csv(&args.output, &report.trades)?;

    for (i, t) in report.trades.iter().take(10).enumerate() {
        info!(
            "{}. {} - {}: {} {} shares @ ${} = ${}",
            i + 1,
            t.ticker.as_deref().unwrap_or("N/A"),
            t.officer_name.as_deref().unwrap_or("N/A"),
            t.direction,
            t.shares,
            t.price_per_share,
            t.total_value,
        );
    }

    Ok(())
}
