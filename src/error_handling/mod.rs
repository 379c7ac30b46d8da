//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions
//! - Categorization of lookup errors
//! - Known/unknown location statistics
//!
//! Severity is binary: a missing primary log or an unwritable output aborts the
//! run, everything else (missing auth log, malformed lines, failed lookups)
//! degrades the report and the run continues.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_lookup_error;
pub use stats::EnrichmentStats;
pub use types::{InitializationError, LogReadError, LookupError, LookupFailure, RenderError};
