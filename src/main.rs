use std::io;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use account_engine::run::run;

/// Interactive account manager over a single in-memory balance.
#[derive(Parser)]
#[command(name = "account_engine", version, about)]
struct Args {
    /// Balance loaded into the store at startup.
    #[arg(long, default_value = "1000.00")]
    initial_balance: Decimal,
}

fn main() -> Result<()> {
    // stdout is the program's transcript; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), args.initial_balance)?;

    Ok(())
}
