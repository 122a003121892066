use clap::Parser;
use tracing_subscriber::EnvFilter;

use pplatest::catalog::{Catalog, ProductPagesClient};
use pplatest::config::DEFAULT_PRODUCT;

#[derive(Parser)]
#[command(name = "pplatest")]
#[command(version, about = "Report the latest release version for a catalog product")]
struct Cli {
    /// Base URL of the catalog API, e.g. https://catalog.example.com/api/v7
    endpoint: String,

    /// Product family shortname to query
    #[arg(long, default_value = DEFAULT_PRODUCT)]
    product: String,
}

fn main() -> anyhow::Result<()> {
    // Log to stderr so the report itself stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(&cli))
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = ProductPagesClient::new(&cli.endpoint);
    let releases = client.fetch_releases(&cli.product).await?;

    for release in releases.iter() {
        println!(
            "Version: {}, phase {}, z-stream: {}",
            release.version(),
            release.phase(),
            release.is_z_stream()
        );
    }

    let y_stream = releases.latest_version(false);
    println!(
        "Latest Y-Stream: {}",
        y_stream.as_deref().unwrap_or("none found")
    );
    let latest = releases.latest_version(true);
    println!("Latest: {}", latest.as_deref().unwrap_or("none found"));

    Ok(())
}
