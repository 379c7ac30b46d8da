//! Sequential, rate-limited enrichment of the ranked IP list.

use std::time::Duration;

use log::{debug, info, warn};

use super::client::HostLookup;
use crate::error_handling::{categorize_lookup_error, EnrichmentStats, LookupFailure};
use crate::models::{EnrichedIp, UniqueIp};

/// Looks up every entry in order, one request at a time.
///
/// Against a remote service each request is preceded by `delay`, and a failed
/// request is followed by another `delay` before the next one. A failure of
/// any kind leaves the entry without a location and counts it as unknown; it
/// is never retried and never aborts the pass.
pub async fn enrich<L: HostLookup>(
    lookup: &L,
    ranked: Vec<UniqueIp>,
    delay: Duration,
) -> (Vec<EnrichedIp>, EnrichmentStats) {
    let mut stats = EnrichmentStats::new();
    let mut enriched = Vec::with_capacity(ranked.len());
    let pace = lookup.is_remote() && !delay.is_zero();

    if lookup.is_remote() {
        info!(
            "Looking up {} hosts ({:.0}s minimum at {}ms per request)",
            ranked.len(),
            delay.saturating_mul(ranked.len() as u32).as_secs_f64(),
            delay.as_millis()
        );
    }

    for unique in ranked {
        if pace {
            tokio::time::sleep(delay).await;
        }

        match lookup.lookup(&unique.ip).await {
            Ok(location) => {
                debug!(
                    "{} ({} {} hits): {:?}, {:?}",
                    unique.ip, unique.service, unique.hits, location.country, location.city
                );
                stats.record_known();
                enriched.push(EnrichedIp::new(unique, Some(location)));
            }
            Err(e) => {
                let failure = categorize_lookup_error(&e);
                match failure {
                    LookupFailure::Unauthorized | LookupFailure::RateLimited => {
                        warn!("Lookup for {} failed: {}", unique.ip, e)
                    }
                    _ => debug!("Lookup for {} failed: {}", unique.ip, e),
                }
                stats.record_unknown(failure);
                enriched.push(EnrichedIp::new(unique, None));
                if pace {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    (enriched, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupError;
    use crate::lookup::{DisabledLookup, HostLocation};
    use crate::models::Service;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::time::Instant;

    /// Answers from a fixed table; IPs not in the table get a 404.
    struct TableLookup {
        table: HashMap<&'static str, HostLocation>,
        calls: RefCell<Vec<String>>,
    }

    impl TableLookup {
        fn new(entries: Vec<(&'static str, HostLocation)>) -> Self {
            TableLookup {
                table: entries.into_iter().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl HostLookup for TableLookup {
        async fn lookup(&self, ip: &str) -> Result<HostLocation, LookupError> {
            self.calls.borrow_mut().push(ip.to_string());
            self.table
                .get(ip)
                .cloned()
                .ok_or(LookupError::Status { status: 404 })
        }
    }

    fn unique(ip: &str, hits: usize) -> UniqueIp {
        UniqueIp {
            ip: ip.to_string(),
            hits,
            service: Service::Apache,
        }
    }

    fn ashburn() -> HostLocation {
        HostLocation {
            country: Some("US".to_string()),
            city: Some("Ashburn".to_string()),
            longitude: Some(-77.4),
            latitude: Some(39.0),
            isp: Some("ExampleNet".to_string()),
        }
    }

    #[tokio::test]
    async fn test_success_and_failure_are_counted() {
        let lookup = TableLookup::new(vec![("1.2.3.4", ashburn())]);
        let (enriched, stats) = enrich(
            &lookup,
            vec![unique("1.2.3.4", 3), unique("5.6.7.8", 1)],
            Duration::ZERO,
        )
        .await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].location, Some(ashburn()));
        assert_eq!(enriched[1].location, None);
        assert_eq!(stats.known(), 1);
        assert_eq!(stats.unknown(), 1);
        assert_eq!(stats.failure_count(LookupFailure::NotFound), 1);
    }

    #[tokio::test]
    async fn test_order_is_preserved_and_each_ip_looked_up_once() {
        let lookup = TableLookup::new(vec![]);
        let ranked = vec![unique("9.9.9.9", 4), unique("8.8.8.8", 2), unique("7.7.7.7", 1)];
        let (enriched, _) = enrich(&lookup, ranked, Duration::ZERO).await;

        let order: Vec<&str> = enriched.iter().map(|e| e.ip.as_str()).collect();
        assert_eq!(order, vec!["9.9.9.9", "8.8.8.8", "7.7.7.7"]);
        assert_eq!(*lookup.calls.borrow(), vec!["9.9.9.9", "8.8.8.8", "7.7.7.7"]);
    }

    #[tokio::test]
    async fn test_delay_precedes_every_request() {
        let lookup = TableLookup::new(vec![("1.1.1.1", ashburn()), ("2.2.2.2", ashburn())]);
        let start = Instant::now();
        let (_, stats) = enrich(
            &lookup,
            vec![unique("1.1.1.1", 1), unique("2.2.2.2", 1)],
            Duration::from_millis(30),
        )
        .await;
        assert_eq!(stats.known(), 2);
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_disabled_lookup_skips_delay() {
        let start = Instant::now();
        let (enriched, stats) = enrich(
            &DisabledLookup,
            vec![unique("1.1.1.1", 1), unique("2.2.2.2", 1)],
            Duration::from_secs(5),
        )
        .await;
        assert!(start.elapsed() < Duration::from_secs(5));
        assert!(enriched.iter().all(|e| e.location.is_none()));
        assert_eq!(stats.unknown(), 2);
        assert_eq!(stats.failure_count(LookupFailure::Disabled), 2);
    }
}
