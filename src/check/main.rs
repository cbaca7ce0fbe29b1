//! Standalone review tool for the compiled-in TubeAPI settings.
//!
//! Flags empty values as errors and convention breaks as warnings.

use std::process::ExitCode;

use clap::Parser;

use tubeapi_config::config::{has_errors, review, Severity};
use tubeapi_config::TubeApiConfig;

/// TubeAPI settings reviewer.
#[derive(Parser, Debug)]
#[command(name = "check_config")]
#[command(about = "Reviews the compiled-in TubeAPI connection settings")]
#[command(version)]
struct Args {
    /// Fail on warnings as well as errors.
    #[arg(short, long)]
    strict: bool,

    /// Show the settings being reviewed.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = TubeApiConfig::compiled();

    if args.verbose {
        println!("API URL: {}", config.api_url());
        println!("API Key: {}\n", config.key_preview());
    }

    let findings = review(&config);

    for finding in &findings {
        let marker = match finding.severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        };
        println!("{marker} {}: {}", finding.severity, finding.issue);
    }

    let errors = findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    if has_errors(&findings) || (args.strict && warnings > 0) {
        println!("\n✗ Review failed: {errors} error(s), {warnings} warning(s)");
        return ExitCode::FAILURE;
    }

    if warnings > 0 {
        println!("\n✓ Settings are usable ({warnings} warning(s))");
    } else {
        println!("✓ Settings look good");
    }

    ExitCode::SUCCESS
}
