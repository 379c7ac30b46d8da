//! Log ingestion: reading the day's log files and extracting source IPs.

mod parser;
mod reader;

// Re-export public API
pub use parser::{parse_lines, AccessLogParser, AuthLogParser, LineParser};
pub use reader::{read_log, Requirement};
