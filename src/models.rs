use std::fmt;

use crate::lookup::HostLocation;

/// The log a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Web server access log
    Apache,
    /// SSH daemon lines of the auth log
    Sshd,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Apache => "apache",
            Service::Sshd => "sshd",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A distinct source address seen in one service's log.
///
/// `hits` is the number of lines of that log attributed to `ip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueIp {
    pub ip: String,
    pub hits: usize,
    pub service: Service,
}

/// A `UniqueIp` after the host lookup.
///
/// `location` is `None` when the lookup failed; the report renders that as the
/// `-,-,0,0,-` placeholder row.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedIp {
    pub ip: String,
    pub hits: usize,
    pub service: Service,
    pub location: Option<HostLocation>,
}

impl EnrichedIp {
    pub fn new(unique: UniqueIp, location: Option<HostLocation>) -> Self {
        EnrichedIp {
            ip: unique.ip,
            hits: unique.hits,
            service: unique.service,
            location,
        }
    }

    /// `(longitude, latitude)` when both are present and non-zero.
    ///
    /// Zero is excluded on either axis so the map keeps the long-standing
    /// plotting rule even though a real 0.0 is preserved in the data.
    pub fn plot_coordinates(&self) -> Option<(f64, f64)> {
        let location = self.location.as_ref()?;
        let lon = location.longitude?;
        let lat = location.latitude?;
        (lon != 0.0 && lat != 0.0 && lon.is_finite() && lat.is_finite()).then_some((lon, lat))
    }
}
