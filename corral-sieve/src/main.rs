//! corral-sieve - prints the primes below a limit.
//!
//! Usage:
//!   corral-sieve [--limit <N>]

use anyhow::Context;
use clap::Parser;
use corral::bitset::BitSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "corral-sieve")]
#[command(about = "Print every prime below a limit using a bit set sieve")]
struct Cli {
    /// Exclusive upper bound of the primes printed
    #[arg(long, default_value_t = 100)]
    limit: usize,
}

/// Returns the primes below `limit` in ascending order.
///
/// Bit `n` of the working set marks `n` as composite.
fn sieve(limit: usize) -> anyhow::Result<Vec<usize>> {
    let mut composite = BitSet::with_len(limit);
    let mut primes = Vec::new();
    for candidate in 2..limit {
        if composite
            .get(candidate)
            .with_context(|| format!("reading candidate {candidate}"))?
        {
            continue;
        }
        primes.push(candidate);
        for multiple in (candidate * candidate..limit).step_by(candidate) {
            composite
                .set(multiple)
                .with_context(|| format!("marking multiple {multiple}"))?;
        }
    }
    Ok(primes)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::info!(limit = cli.limit, "sieving");

    let primes = sieve(cli.limit)?;
    for prime in &primes {
        println!("{prime}");
    }
    tracing::info!(count = primes.len(), "done");
    Ok(())
}
