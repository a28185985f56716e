// Writes a synthetic telemetry CSV in the format the service reads.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use telemetry_aggregator::generator::{GeneratorConfig, generate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "generate-telemetry")]
#[command(about = "Generate synthetic device telemetry CSV", long_about = None)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "telemetry.csv")]
    output: PathBuf,

    /// First timestamp (ISO-8601)
    #[arg(long, default_value = "2024-02-02T00:00:00Z")]
    start: DateTime<Utc>,

    /// Number of days to generate
    #[arg(long, default_value_t = 2)]
    days: i64,

    /// Seconds between readings
    #[arg(long, default_value_t = 1)]
    step_secs: i64,

    #[arg(long, default_value = "DEVICE_001")]
    device_id: String,

    /// RNG seed; same seed, same file
    #[arg(long, default_value_t = 0x0200_2024)]
    seed: u64,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    anyhow::ensure!(args.days > 0, "--days must be > 0, got {}", args.days);
    anyhow::ensure!(
        args.step_secs > 0,
        "--step-secs must be > 0, got {}",
        args.step_secs
    );

    let config =
        GeneratorConfig::spanning_days(args.device_id, args.start, args.days, args.step_secs)
            .with_context(|| {
                format!(
                    "--days {} / --step-secs {} out of range from {}",
                    args.days, args.step_secs, args.start
                )
            })?;
    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let rows = generate(BufWriter::new(file), &config, &mut rng)?;
    tracing::info!(rows, output = %args.output.display(), "telemetry generated");
    Ok(())
}
