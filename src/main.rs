//! Command-line interface for json-fixture
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate a fixture of at least 5000 serialized bytes
//! generate_json out.json 5000
//!
//! # The sampled deep path lands in a sidecar next to the document
//! cat out.json.path
//! ```

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate_json")]
#[command(about = "Generate a random JSON test fixture of at least the requested size")]
#[command(long_about = None)]
struct Cli {
    /// Output path for the generated JSON document
    file_path: PathBuf,

    /// Minimum size of the serialized document, in bytes
    size_in_bytes: u64,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let report = json_fixture::generate_fixture(&cli.file_path, cli.size_in_bytes)?;

    println!("Generated JSON file at: {}", cli.file_path.display());
    println!("Path to a deep value: {}", report.deep_path);

    Ok(())
}
