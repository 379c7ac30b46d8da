//! Per-format source IP extraction.
//!
//! Each log format gets its own `LineParser` so a change in one format cannot
//! disturb the counts of the other.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::config::SSHD_MARKER;
use crate::models::Service;

/// Extracts the source IP of one log line.
pub trait LineParser {
    /// The service hits from this log are attributed to.
    fn service(&self) -> Service;

    /// Returns the source IP, or `None` if the line does not qualify.
    fn extract_ip(&self, line: &str) -> Option<String>;
}

/// Fewest fields a combined-format line yields once the timestamp is
/// re-split. Shorter lines are treated as malformed.
const MIN_ACCESS_FIELDS: usize = 6;

/// Index of the unsplit first segment, repeated after its own tokens.
const DUPLICATE_FIELD_INDEX: usize = 5;

/// Parser for Apache combined-format access logs.
///
/// ```text
/// 209.141.56.209 - - [31/Oct/2021:00:54:46 -0400] "GET / HTTP/1.1" 200 284 "-" "Linux Gnu (cow)"
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessLogParser;

impl AccessLogParser {
    /// Splits a line into its fields.
    ///
    /// A quote followed by a space is removed before splitting on quotes, so
    /// quoted request and user-agent text stays in one field each. The first
    /// segment (address, identity, user, timestamp) has its brackets stripped
    /// and is re-split on whitespace.
    ///
    /// For the line above this yields
    /// `[209.141.56.209, -, -, 31/Oct/2021:00:54:46, -0400, GET / HTTP/1.1200 284 , -, Linux Gnu (cow)]`.
    pub fn fields(line: &str) -> Option<Vec<String>> {
        let normalized = line.replace("\" ", "");
        let segments: Vec<&str> = normalized.split('"').collect();
        let head = segments[0].replace(['[', ']'], "");

        let mut fields: Vec<String> = head.split_whitespace().map(str::to_string).collect();
        fields.extend(segments.iter().map(|s| s.to_string()));

        if fields.len() < MIN_ACCESS_FIELDS {
            return None;
        }
        fields.remove(DUPLICATE_FIELD_INDEX);
        fields.pop();
        Some(fields)
    }
}

impl LineParser for AccessLogParser {
    fn service(&self) -> Service {
        Service::Apache
    }

    fn extract_ip(&self, line: &str) -> Option<String> {
        let fields = Self::fields(line)?;
        fields.into_iter().next().filter(|ip| !ip.is_empty())
    }
}

/// Dotted quad with every octet limited to 0-255 by the pattern itself.
/// Alternatives run longest first and both ends are word-bounded, so
/// `192.168.1.100` is captured whole and `999.1.1.1` does not match.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let octet = r"(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])";
    Regex::new(&format!(r"\b(?:{octet}\.){{3}}{octet}\b"))
        .expect("IPv4 pattern is a valid regex")
});

/// Parser for syslog auth logs.
///
/// A line counts only if it carries the sshd marker and an IPv4 address; the
/// first address on the line is used.
///
/// ```text
/// Oct 31 00:02:11 host sshd[1234]: Invalid user admin from 45.135.232.20 port 51234
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthLogParser;

impl LineParser for AuthLogParser {
    fn service(&self) -> Service {
        Service::Sshd
    }

    fn extract_ip(&self, line: &str) -> Option<String> {
        if !line.contains(SSHD_MARKER) {
            return None;
        }
        IPV4_PATTERN.find(line).map(|m| m.as_str().to_string())
    }
}

/// Collects the raw IP hits of a log in encounter order.
pub fn parse_lines<P: LineParser + ?Sized>(parser: &P, lines: &[String]) -> Vec<String> {
    let mut hits = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;
    for line in lines {
        match parser.extract_ip(line) {
            Some(ip) => hits.push(ip),
            None => {
                skipped += 1;
                trace!("{}: skipped line {:?}", parser.service(), line);
            }
        }
    }
    debug!(
        "{}: {} hits, {} lines skipped",
        parser.service(),
        hits.len(),
        skipped
    );
    hits
}
