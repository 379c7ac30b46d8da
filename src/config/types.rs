//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};
use clap::{Parser, ValueEnum};

use crate::config::constants::*;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or built programmatically with
/// `..Default::default()` by library users and tests. Every default matches the
/// CLI default.
///
/// # Examples
///
/// ```bash
/// # Yesterday's logs from /var/log/archive, key from SHODAN_API_KEY
/// logmap --apache-dir /var/log/archive --sshd-dir /var/log/archive
///
/// # A specific day, outputs elsewhere
/// logmap --date 2021-10-31 --csv-dir reports --map-dir reports
/// ```
#[derive(Clone, Parser)]
#[command(
    name = "logmap",
    about = "Maps the origin of apache and sshd connection attempts for one day of logs."
)]
pub struct Config {
    /// Day whose logs are processed (YYYY-MM-DD). Defaults to yesterday.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Directory holding <apache-prefix>_YYYY_MM_DD.log
    #[arg(long, default_value = ".")]
    pub apache_dir: PathBuf,

    /// Directory holding <sshd-prefix>_YYYY_MM_DD.log
    #[arg(long, default_value = ".")]
    pub sshd_dir: PathBuf,

    /// File-name prefix of the access log
    #[arg(long, default_value = DEFAULT_APACHE_PREFIX)]
    pub apache_prefix: String,

    /// File-name prefix of the auth log
    #[arg(long, default_value = DEFAULT_SSHD_PREFIX)]
    pub sshd_prefix: String,

    /// Explicit access log path (overrides --apache-dir/--apache-prefix)
    #[arg(long)]
    pub apache_log: Option<PathBuf>,

    /// Explicit auth log path (overrides --sshd-dir/--sshd-prefix)
    #[arg(long)]
    pub sshd_log: Option<PathBuf>,

    /// Directory the CSV report is written to
    #[arg(long, default_value = ".")]
    pub csv_dir: PathBuf,

    /// Directory the map image is written to
    #[arg(long, default_value = ".")]
    pub map_dir: PathBuf,

    /// Shodan API key. Without one every IP is reported with an unknown location.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the host lookup API
    #[arg(long, default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    /// Pause before each lookup, in milliseconds
    #[arg(long, default_value_t = DEFAULT_LOOKUP_DELAY_MS)]
    pub lookup_delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// First field of the CSV summary line
    #[arg(long, default_value = DEFAULT_REPORT_LABEL)]
    pub label: String,

    /// Resolution of the map image
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Map width in inches
    #[arg(long, default_value_t = DEFAULT_FIGURE_WIDTH_INCHES)]
    pub figure_width: f64,

    /// Equirectangular world raster used for land, lakes and borders
    /// instead of the built-in outlines
    #[arg(long)]
    pub basemap: Option<PathBuf>,

    /// Skip rendering the map
    #[arg(long)]
    pub no_map: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date: None,
            apache_dir: PathBuf::from("."),
            sshd_dir: PathBuf::from("."),
            apache_prefix: DEFAULT_APACHE_PREFIX.to_string(),
            sshd_prefix: DEFAULT_SSHD_PREFIX.to_string(),
            apache_log: None,
            sshd_log: None,
            csv_dir: PathBuf::from("."),
            map_dir: PathBuf::from("."),
            api_key: None,
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            lookup_delay_ms: DEFAULT_LOOKUP_DELAY_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            label: DEFAULT_REPORT_LABEL.to_string(),
            dpi: DEFAULT_DPI,
            figure_width: DEFAULT_FIGURE_WIDTH_INCHES,
            basemap: None,
            no_map: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

// Hand-written so the API key never reaches a log line or panic message
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("date", &self.date)
            .field("apache_dir", &self.apache_dir)
            .field("sshd_dir", &self.sshd_dir)
            .field("apache_prefix", &self.apache_prefix)
            .field("sshd_prefix", &self.sshd_prefix)
            .field("apache_log", &self.apache_log)
            .field("sshd_log", &self.sshd_log)
            .field("csv_dir", &self.csv_dir)
            .field("map_dir", &self.map_dir)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("lookup_url", &self.lookup_url)
            .field("lookup_delay_ms", &self.lookup_delay_ms)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("label", &self.label)
            .field("dpi", &self.dpi)
            .field("figure_width", &self.figure_width)
            .field("basemap", &self.basemap)
            .field("no_map", &self.no_map)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid --{}: {}", self.field.replace('_', "-"), self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks option values that clap cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(ConfigValidationError {
                field: "dpi",
                message: format!("must be between 1 and {}", MAX_DPI),
            });
        }
        if !(self.figure_width.is_finite() && self.figure_width > 0.0) {
            return Err(ConfigValidationError {
                field: "figure_width",
                message: "must be a positive number of inches".to_string(),
            });
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.apache_prefix.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "apache_prefix",
                message: "must not be empty".to_string(),
            });
        }
        if self.sshd_prefix.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "sshd_prefix",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The day being reported on: `--date`, or yesterday in local time.
    pub fn report_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| {
            let today = Local::now().date_naive();
            today.checked_sub_days(Days::new(1)).unwrap_or(today)
        })
    }

    /// `YYYY_MM_DD` stamp used in file names and the CSV summary line.
    pub fn date_stamp(&self) -> String {
        self.report_date().format(DATE_STAMP_FORMAT).to_string()
    }

    pub fn apache_log_path(&self) -> PathBuf {
        self.apache_log.clone().unwrap_or_else(|| {
            self.apache_dir
                .join(log_file_name(&self.apache_prefix, &self.date_stamp()))
        })
    }

    pub fn sshd_log_path(&self) -> PathBuf {
        self.sshd_log.clone().unwrap_or_else(|| {
            self.sshd_dir
                .join(log_file_name(&self.sshd_prefix, &self.date_stamp()))
        })
    }

    pub fn csv_path(&self) -> PathBuf {
        self.csv_dir
            .join(format!("{}_{}.csv", CSV_PREFIX, self.date_stamp()))
    }

    pub fn map_path(&self) -> PathBuf {
        self.map_dir
            .join(format!("{}_{}.png", MAP_PREFIX, self.date_stamp()))
    }

    /// The API key, ignoring blank values (an empty `SHODAN_API_KEY=`).
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn log_file_name(prefix: &str, stamp: &str) -> String {
    format!("{}_{}.{}", prefix, stamp, LOG_EXTENSION)
}
