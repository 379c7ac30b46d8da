//! Host location lookup.
//!
//! This module provides the `HostLookup` abstraction, its Shodan-backed
//! implementation, and the enrichment pass that applies it to the ranked IP
//! list with a fixed pause between requests.

mod client;
mod enrich;
mod types;

// Re-export public API
pub use client::{DisabledLookup, HostLookup, ShodanClient};
pub use enrich::enrich;
pub use types::HostLocation;
