//! TubeAPI Configuration - Main Entry Point
//!
//! Loads the TubeAPI connection settings and prints the confirmation
//! banner for the operator.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tubeapi_config::TubeApiConfig;

/// Load and confirm the TubeAPI connection settings.
#[derive(Parser, Debug)]
#[command(name = "tubeapi_config")]
#[command(about = "Load and confirm the TubeAPI connection settings")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Write the production template to the given path and exit.
    #[arg(long)]
    generate_template: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    if let Some(path) = args.generate_template {
        return generate_template(&path);
    }

    let config = TubeApiConfig::global();
    debug!("Configuration ready: {:?}", config);

    Ok(())
}

/// Initializes the logging subsystem on stderr, keeping stdout for the banner.
fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Writes the production template.
fn generate_template(path: &str) -> Result<()> {
    TubeApiConfig::production_template()
        .save_to_file(path)
        .with_context(|| format!("Failed to write template to {path}"))?;

    info!("Template generated");
    println!("✓ Production template written to: {path}");
    println!("\nTo use it:");
    println!("1. Replace api_url with your TubeAPI domain");
    println!("2. Replace api_key with your actual API key");
    println!("3. Update API_URL and API_KEY in src/config/mod.rs and rebuild");

    Ok(())
}
