//! Deduplication, hit counting and ranking.

use std::collections::HashMap;

use crate::models::{Service, UniqueIp};

/// Aggregated view of one service's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTally {
    /// Lines attributed to an IP
    pub raw_hits: usize,
    /// Distinct IPs, most hits first
    pub ranked: Vec<UniqueIp>,
}

impl LogTally {
    pub fn from_hits(raw_hits: &[String], service: Service) -> Self {
        LogTally {
            raw_hits: raw_hits.len(),
            ranked: tally(raw_hits, service),
        }
    }

    pub fn empty() -> Self {
        LogTally {
            raw_hits: 0,
            ranked: Vec::new(),
        }
    }
}

/// Counts the hits of each distinct IP and ranks them by hit count.
///
/// Distinct IPs are first listed in the order they were first seen; the sort
/// is stable, so IPs with equal counts keep that order.
pub fn tally(raw_hits: &[String], service: Service) -> Vec<UniqueIp> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut unique: Vec<UniqueIp> = Vec::new();

    for ip in raw_hits {
        match index.get(ip.as_str()) {
            Some(&i) => unique[i].hits += 1,
            None => {
                index.insert(ip, unique.len());
                unique.push(UniqueIp {
                    ip: ip.clone(),
                    hits: 1,
                    service,
                });
            }
        }
    }

    rank(&mut unique);
    unique
}

/// Concatenates the apache and sshd lists and ranks the result.
///
/// On equal hit counts the apache entry comes first, since it precedes the
/// sshd block before the stable sort.
pub fn merge_ranked(apache: Vec<UniqueIp>, sshd: Vec<UniqueIp>) -> Vec<UniqueIp> {
    let mut merged = apache;
    merged.extend(sshd);
    rank(&mut merged);
    merged
}

fn rank(entries: &mut [UniqueIp]) {
    entries.sort_by(|a, b| b.hits.cmp(&a.hits));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(ips: &[&str]) -> Vec<String> {
        ips.iter().map(|s| s.to_string()).collect()
    }

    fn unique(ip: &str, hits: usize, service: Service) -> UniqueIp {
        UniqueIp {
            ip: ip.to_string(),
            hits,
            service,
        }
    }

    #[test]
    fn test_tally_counts_and_ranks() {
        let raw = hits(&["5.6.7.8", "1.2.3.4", "1.2.3.4", "1.2.3.4"]);
        assert_eq!(
            tally(&raw, Service::Apache),
            vec![
                unique("1.2.3.4", 3, Service::Apache),
                unique("5.6.7.8", 1, Service::Apache),
            ]
        );
    }

    #[test]
    fn test_tally_ties_keep_first_seen_order() {
        let raw = hits(&["9.9.9.9", "1.1.1.1", "2.2.2.2", "1.1.1.1", "9.9.9.9"]);
        let ranked = tally(&raw, Service::Sshd);
        let order: Vec<&str> = ranked.iter().map(|u| u.ip.as_str()).collect();
        assert_eq!(order, vec!["9.9.9.9", "1.1.1.1", "2.2.2.2"]);
    }

    #[test]
    fn test_tally_hits_sum_to_raw_count() {
        let raw = hits(&["a", "b", "a", "c", "b", "a"]);
        let ranked = tally(&raw, Service::Apache);
        assert_eq!(ranked.iter().map(|u| u.hits).sum::<usize>(), raw.len());
        for entry in &ranked {
            let expected = raw.iter().filter(|ip| **ip == entry.ip).count();
            assert_eq!(entry.hits, expected);
        }
    }

    #[test]
    fn test_tally_empty() {
        assert!(tally(&[], Service::Sshd).is_empty());
    }

    #[test]
    fn test_merge_is_sorted_and_apache_wins_ties() {
        let apache = vec![
            unique("1.1.1.1", 5, Service::Apache),
            unique("2.2.2.2", 2, Service::Apache),
        ];
        let sshd = vec![
            unique("3.3.3.3", 7, Service::Sshd),
            unique("4.4.4.4", 2, Service::Sshd),
        ];
        let merged = merge_ranked(apache, sshd);

        assert_eq!(merged.len(), 4);
        assert!(merged.windows(2).all(|w| w[0].hits >= w[1].hits));
        assert_eq!(merged[0].ip, "3.3.3.3");
        assert_eq!(merged[2], unique("2.2.2.2", 2, Service::Apache));
        assert_eq!(merged[3], unique("4.4.4.4", 2, Service::Sshd));
    }

    #[test]
    fn test_same_ip_in_both_services_stays_separate() {
        let merged = merge_ranked(
            vec![unique("1.2.3.4", 1, Service::Apache)],
            vec![unique("1.2.3.4", 1, Service::Sshd)],
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].service, Service::Apache);
        assert_eq!(merged[1].service, Service::Sshd);
    }

    #[test]
    fn test_log_tally_counts_raw_hits() {
        let t = LogTally::from_hits(&hits(&["1.2.3.4", "1.2.3.4", "1.2.3.4", "5.6.7.8"]), Service::Apache);
        assert_eq!(t.raw_hits, 4);
        assert_eq!(
            t.ranked,
            vec![
                unique("1.2.3.4", 3, Service::Apache),
                unique("5.6.7.8", 1, Service::Apache)
            ]
        );
        assert_eq!(LogTally::empty().raw_hits, 0);
    }
}
