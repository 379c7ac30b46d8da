//! CSV report.
//!
//! Layout:
//!
//! ```text
//! Ip Log,2021_10_31,Unique IPs:,2,Total Hits:,4
//! IP,Hits,Service,Country,City,Longitude,Latitude,Isp
//! 1.2.3.4,3,apache,US,Ashburn,-77.4,39.0,ExampleNet
//! 5.6.7.8,1,apache,-,-,0,0,-
//! ```
//!
//! Fields are never quoted. Commas and line breaks are removed from the
//! provider's text fields instead, so every data row has exactly eight fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use super::types::ReportSummary;
use crate::config::{CSV_HEADER, UNKNOWN_COORDINATE, UNKNOWN_TEXT};
use crate::models::EnrichedIp;

/// Writes the report to `path`, replacing any existing file.
///
/// # Returns
///
/// The number of data rows written (one per entry).
pub fn write_csv(path: &Path, summary: &ReportSummary, entries: &[EnrichedIp]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV report: {}", path.display()))?;
    let rows = write_report(file, summary, entries)
        .with_context(|| format!("Failed to write CSV report: {}", path.display()))?;
    Ok(rows)
}

/// Writes the report to any writer.
pub fn write_report<W: Write>(
    output: W,
    summary: &ReportSummary,
    entries: &[EnrichedIp],
) -> Result<usize> {
    // The summary line is shorter than the data rows, hence flexible()
    let mut writer: Writer<W> = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    let unique = entries.len().to_string();
    let total_hits = summary.total_hits.to_string();
    writer.write_record([
        clean_text(&summary.label).as_str(),
        summary.date_stamp.as_str(),
        "Unique IPs:",
        unique.as_str(),
        "Total Hits:",
        total_hits.as_str(),
    ])?;
    writer.write_record(CSV_HEADER)?;

    for entry in entries {
        writer.write_record(data_row(entry))?;
    }
    writer.flush()?;

    Ok(entries.len())
}

fn data_row(entry: &EnrichedIp) -> [String; 8] {
    let location = entry.location.as_ref();
    let text = |field: Option<&String>| {
        field
            .map(|s| clean_text(s))
            .unwrap_or_else(|| UNKNOWN_TEXT.to_string())
    };

    [
        entry.ip.clone(),
        entry.hits.to_string(),
        entry.service.to_string(),
        text(location.and_then(|l| l.country.as_ref())),
        text(location.and_then(|l| l.city.as_ref())),
        format_coordinate(location.and_then(|l| l.longitude)),
        format_coordinate(location.and_then(|l| l.latitude)),
        text(location.and_then(|l| l.isp.as_ref())),
    ]
}

/// Removes commas and folds line breaks so a value stays inside one field.
fn clean_text(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ',')
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Formats a coordinate the way the report has always shown them: whole
/// values keep one decimal (`39.0`), a missing value is a bare `0`.
fn format_coordinate(value: Option<f64>) -> String {
    match value {
        None => UNKNOWN_COORDINATE.to_string(),
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{:.1}", v),
        Some(v) => v.to_string(),
    }
}
