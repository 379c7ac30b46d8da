//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! failure categories tracked for host lookups.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error reading an input log.
#[derive(Error, Debug)]
pub enum LogReadError {
    /// The primary (access) log could not be opened. Aborts the run.
    #[error("required log {} could not be opened", .path.display())]
    MissingPrimary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log was opened but reading it failed part way through.
    #[error("failed reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a host lookup produced no location.
///
/// The lookup client returns these; the enrichment stage turns every one of
/// them into the unknown-location record.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No API key is configured, so no request was sent.
    #[error("host lookup disabled (no API key)")]
    Disabled,

    /// The request URL could not be built from the configured base URL.
    #[error("invalid lookup URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure (connect, timeout, body read).
    #[error("lookup request failed: {0}")]
    Http(#[from] ReqwestError),

    /// The provider answered with a non-success status.
    #[error("lookup returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON document.
    #[error("lookup response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error rendering or saving the map image.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The basemap raster could not be loaded.
    #[error("failed to load basemap {}", .path.display())]
    Basemap {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The requested canvas has no pixels or is too large to allocate.
    #[error("invalid canvas size {width}x{height}")]
    CanvasSize { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("PNG encoding error: {0}")]
    Encode(#[from] png::EncodingError),

    /// The output file could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Categories of lookup failure, counted for the end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupFailure {
    Disabled,
    Timeout,
    Connect,
    NotFound,       // 404, the provider has no record of the host
    Unauthorized,   // 401/403, bad key or plan limits
    RateLimited,    // 429
    ServerError,    // 5xx
    HttpStatus,     // any other non-success status
    Decode,
    Other,
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupFailure::Disabled => "Lookup disabled",
            LookupFailure::Timeout => "Request timeout",
            LookupFailure::Connect => "Connection error",
            LookupFailure::NotFound => "No information available (404)",
            LookupFailure::Unauthorized => "Unauthorized (401/403)",
            LookupFailure::RateLimited => "Too many requests (429)",
            LookupFailure::ServerError => "Server error (5xx)",
            LookupFailure::HttpStatus => "Unexpected HTTP status",
            LookupFailure::Decode => "Malformed response",
            LookupFailure::Other => "Other request error",
        }
    }
}
