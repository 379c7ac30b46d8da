//! Export types.

/// Run-level figures written on the first line of the CSV report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportSummary {
    /// First field of the summary line (`Ip Log` by default)
    pub label: String,
    /// Day of the logs as `YYYY_MM_DD`
    pub date_stamp: String,
    /// Lines attributed to an IP across both logs
    pub total_hits: usize,
}
