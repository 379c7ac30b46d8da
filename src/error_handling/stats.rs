//! Enrichment statistics tracking.
//!
//! Counts how many hosts were located and, for the rest, why the lookup
//! failed.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::LookupFailure;

/// Known/unknown tallies for one enrichment pass.
///
/// Every `LookupFailure` category is initialized to zero on creation so the
/// printout can iterate them in declaration order.
#[derive(Debug, Clone)]
pub struct EnrichmentStats {
    known: usize,
    failures: HashMap<LookupFailure, usize>,
}

impl Default for EnrichmentStats {
    fn default() -> Self {
        Self::new()
    }
}

impl EnrichmentStats {
    pub fn new() -> Self {
        let failures = LookupFailure::iter().map(|f| (f, 0)).collect();
        EnrichmentStats { known: 0, failures }
    }

    /// Record a host whose location was found.
    pub fn record_known(&mut self) {
        self.known += 1;
    }

    /// Record a host whose lookup failed.
    pub fn record_unknown(&mut self, failure: LookupFailure) {
        *self.failures.entry(failure).or_insert(0) += 1;
    }

    pub fn known(&self) -> usize {
        self.known
    }

    /// Number of hosts reported with the unknown-location record.
    pub fn unknown(&self) -> usize {
        self.failures.values().sum()
    }

    pub fn failure_count(&self, failure: LookupFailure) -> usize {
        self.failures.get(&failure).copied().unwrap_or(0)
    }
}
