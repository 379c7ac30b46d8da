//! logmap library: daily access report for web and SSH logs
//!
//! Reads one day of Apache access log and sshd auth log, ranks the client IPs
//! by hit count, looks each one up against the Shodan host API and writes a
//! CSV report plus a PNG world map of the located addresses.
//!
//! # Example
//!
//! ```no_run
//! use logmap::{run_report, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     date: chrono::NaiveDate::from_ymd_opt(2021, 10, 31),
//!     apache_dir: "/var/log/archive".into(),
//!     sshd_dir: "/var/log/archive".into(),
//!     api_key: std::env::var("SHODAN_API_KEY").ok(),
//!     ..Default::default()
//! };
//!
//! let report = run_report(config).await?;
//! println!("{} unique IPs, {} located", report.unique_ips, report.known);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `run_report` must be called from within a Tokio runtime.

pub mod aggregate;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod logs;
pub mod lookup;
pub mod models;
pub mod render;

pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_report, RunReport};

mod run {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use chrono::NaiveDate;
    use log::{info, warn};
    use strum::IntoEnumIterator;

    use crate::aggregate::{merge_ranked, LogTally};
    use crate::config::Config;
    use crate::error_handling::{EnrichmentStats, LookupFailure};
    use crate::export::{write_csv, ReportSummary};
    use crate::initialization::init_client;
    use crate::logs::{parse_lines, read_log, AccessLogParser, AuthLogParser, LineParser, Requirement};
    use crate::lookup::{enrich, DisabledLookup, ShodanClient};
    use crate::models::EnrichedIp;
    use crate::render::{render_map, MapOptions, MapSummary};

    /// Outcome of a report run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Day the logs cover
        pub date: NaiveDate,
        /// Distinct (IP, service) pairs in the report
        pub unique_ips: usize,
        /// Lines attributed to an IP across both logs
        pub total_hits: usize,
        /// IPs with a successful lookup
        pub known: usize,
        /// IPs whose lookup failed
        pub unknown: usize,
        pub csv_path: PathBuf,
        /// `None` when rendering was skipped with `--no-map`
        pub map_path: Option<PathBuf>,
        pub elapsed_seconds: f64,
    }

    /// Produces the CSV report and the map for one day of logs.
    ///
    /// The stages run strictly in order: read and parse the access log, then
    /// the auth log, rank, look up every IP, write the CSV, render the map.
    ///
    /// # Errors
    ///
    /// Fails without writing anything if the configuration is invalid or the
    /// access log cannot be opened. Failures writing the CSV or the map are
    /// also returned. A missing auth log and failed lookups are not errors.
    pub async fn run_report(config: Config) -> Result<RunReport> {
        let start = Instant::now();
        config.validate()?;

        let date = config.report_date();
        let date_stamp = config.date_stamp();
        info!("Building report for {}", date_stamp);

        let apache_path = config.apache_log_path();
        let apache = tally_log(&AccessLogParser, &apache_path, Requirement::Required)
            .with_context(|| format!("Cannot build report without {}", apache_path.display()))?;
        let sshd = tally_log(&AuthLogParser, &config.sshd_log_path(), Requirement::Optional)?;

        let total_hits = apache.raw_hits + sshd.raw_hits;
        info!(
            "apache: {} hits from {} IPs, sshd: {} hits from {} IPs",
            apache.raw_hits,
            apache.ranked.len(),
            sshd.raw_hits,
            sshd.ranked.len()
        );
        let ranked = merge_ranked(apache.ranked, sshd.ranked);
        let unique_ips = ranked.len();

        let delay = Duration::from_millis(config.lookup_delay_ms);
        let (entries, stats) = match config.api_key() {
            Some(key) => {
                let client = init_client(&config).context("Failed to initialize HTTP client")?;
                let lookup = ShodanClient::new(client, &config.lookup_url, key)
                    .with_context(|| format!("Invalid lookup URL: {}", config.lookup_url))?;
                enrich(&lookup, ranked, delay).await
            }
            None => {
                warn!(
                    "No API key set (--api-key or {}); every location will be unknown",
                    crate::config::API_KEY_ENV
                );
                enrich(&DisabledLookup, ranked, delay).await
            }
        };
        log_enrichment_stats(&stats);

        let csv_path = config.csv_path();
        let summary = ReportSummary {
            label: config.label.clone(),
            date_stamp: date_stamp.clone(),
            total_hits,
        };
        let rows = write_csv(&csv_path, &summary, &entries)?;
        info!("Wrote {} rows to {}", rows, csv_path.display());

        let map_path = if config.no_map {
            None
        } else {
            let path = config.map_path();
            draw(&config, &path, &entries, date_stamp, total_hits, &stats)?;
            Some(path)
        };

        Ok(RunReport {
            date,
            unique_ips,
            total_hits,
            known: stats.known(),
            unknown: stats.unknown(),
            csv_path,
            map_path,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    fn tally_log<P: LineParser>(
        parser: &P,
        path: &std::path::Path,
        requirement: Requirement,
    ) -> Result<LogTally> {
        let tally = match read_log(path, requirement)? {
            Some(lines) => LogTally::from_hits(&parse_lines(parser, &lines), parser.service()),
            None => LogTally::empty(),
        };
        Ok(tally)
    }

    fn draw(
        config: &Config,
        path: &std::path::Path,
        entries: &[EnrichedIp],
        title: String,
        total_hits: usize,
        stats: &EnrichmentStats,
    ) -> Result<()> {
        let summary = MapSummary {
            total_hits,
            total_unique: entries.len(),
            known: stats.known(),
            unknown: stats.unknown(),
        };
        let options = MapOptions {
            dpi: config.dpi,
            figure_width_inches: config.figure_width,
            basemap: config.basemap.clone(),
            title,
        };
        render_map(path, entries, &summary, &options)
            .with_context(|| format!("Failed to render map: {}", path.display()))?;
        Ok(())
    }

    fn log_enrichment_stats(stats: &EnrichmentStats) {
        info!(
            "Lookups: {} known, {} unknown",
            stats.known(),
            stats.unknown()
        );
        for failure in LookupFailure::iter() {
            let count = stats.failure_count(failure);
            if count > 0 {
                info!("   {}: {}", failure, count);
            }
        }
    }
}
