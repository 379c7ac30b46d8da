//! Command-line entry point.
//!
//! Parses options, sets up logging and hands off to `logmap::run_report`.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use logmap::initialization::init_logger_with;
use logmap::{run_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_report(config).await {
        Ok(report) => {
            println!(
                "✅ {} unique IP{} ({} hits, {} located, {} unknown) in {:.1}s",
                report.unique_ips,
                if report.unique_ips == 1 { "" } else { "s" },
                report.total_hits,
                report.known,
                report.unknown,
                report.elapsed_seconds
            );
            println!("Report saved in {}", report.csv_path.display());
            if let Some(map) = &report.map_path {
                println!("Map saved in {}", map.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("logmap error: {:#}", e);
            process::exit(1);
        }
    }
}
