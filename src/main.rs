use clap::Parser;
use tracing_subscriber::EnvFilter;

use rocm_nightly::app::{RunOptions, run};
use rocm_nightly::config::{DEFAULT_COUNT, DEFAULT_TARGET, ListingQuery, Platform, S3_BASE_URL};
use rocm_nightly::listing::S3Listing;

/// List ROCm nightly tarball URLs for a given platform and GPU target.
#[derive(Parser)]
#[command(name = "rocm-nightly")]
#[command(version, about)]
struct Cli {
    /// Platform segment of the tarball name
    #[arg(short, long, value_enum, default_value_t = Platform::Linux)]
    platform: Platform,

    /// GPU target (gfx110X and gfx120X are mapped to their bucket aliases)
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Number of newest URLs to print
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Only print the URLs
    #[arg(short, long)]
    quiet: bool,

    /// Bucket base URL
    #[arg(long, default_value = S3_BASE_URL, hide = true)]
    base_url: String,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let source = S3Listing::new(&cli.base_url);
    let options = RunOptions {
        query: ListingQuery::new(cli.platform, &cli.target),
        count: cli.count,
        quiet: cli.quiet,
        base_url: source.base_url().to_string(),
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&source, &options, std::io::stdout().lock()))?;

    Ok(())
}
