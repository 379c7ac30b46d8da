//! Configuration constants.
//!
//! This module defines the defaults used by the CLI and the fixed strings that
//! make up the output file names and CSV layout.

// Input/output naming
/// File-name prefix of the web server access log (`apache_YYYY_MM_DD.log`)
pub const DEFAULT_APACHE_PREFIX: &str = "apache";
/// File-name prefix of the authentication log (`auth_YYYY_MM_DD.log`)
pub const DEFAULT_SSHD_PREFIX: &str = "auth";
/// Extension appended to both log names
pub const LOG_EXTENSION: &str = "log";
/// CSV output prefix (`ipList_YYYY_MM_DD.csv`)
pub const CSV_PREFIX: &str = "ipList";
/// Map output prefix (`map_YYYY_MM_DD.png`)
pub const MAP_PREFIX: &str = "map";
/// Date format used in every generated file name and the CSV summary line
pub const DATE_STAMP_FORMAT: &str = "%Y_%m_%d";

// Lookup service
/// Base URL of the Shodan REST API
pub const DEFAULT_LOOKUP_URL: &str = "https://api.shodan.io";
/// Environment variable consulted for the API key when `--api-key` is absent
pub const API_KEY_ENV: &str = "SHODAN_API_KEY";
/// Pause before every lookup (and again after a failed one), in milliseconds.
/// Keeps a free-tier key under the provider's one-request-per-second limit.
pub const DEFAULT_LOOKUP_DELAY_MS: u64 = 1000;
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("logmap/", env!("CARGO_PKG_VERSION"));

// Report
/// First field of the CSV summary line
pub const DEFAULT_REPORT_LABEL: &str = "Ip Log";
pub const CSV_HEADER: [&str; 8] = [
    "IP",
    "Hits",
    "Service",
    "Country",
    "City",
    "Longitude",
    "Latitude",
    "Isp",
];
/// Placeholder written for text fields the lookup could not provide
pub const UNKNOWN_TEXT: &str = "-";
/// Placeholder written for coordinates the lookup could not provide
pub const UNKNOWN_COORDINATE: &str = "0";

// Map
pub const DEFAULT_DPI: u32 = 200;
/// Maximum accepted DPI; 1200 DPI at the default width is already ~7700px wide
pub const MAX_DPI: u32 = 1200;
/// Figure width in inches (height is half of it, plus the title band)
pub const DEFAULT_FIGURE_WIDTH_INCHES: f64 = 6.4;

// Auth log
/// Substring that marks a line as written by the SSH daemon
pub const SSHD_MARKER: &str = "sshd";
