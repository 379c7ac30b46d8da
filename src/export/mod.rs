//! Export of the enriched IP list.
//!
//! This module writes the ranked, enriched list to the daily CSV report.

mod csv;
mod types;

pub use self::csv::{write_csv, write_report};
pub use types::ReportSummary;
