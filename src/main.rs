use clap::Parser;
use latency_buckets::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "latency-buckets")]
#[command(about = "Per-bucket latency statistics from a benchmark latency log", long_about = None)]
struct Cli {
    /// Latency log written by the benchmark run.
    input: String,

    /// Where to write the CSV statistics.
    output: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    latency_buckets::run(&cli.input, &cli.output)?;
    println!("Wrote {}", cli.output);

    Ok(())
}
