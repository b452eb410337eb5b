//! Read-only aggregation for the records view.

use crate::models::record::ClockRecord;
use std::collections::HashSet;

/// Headline counters shown under the records table.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub entries: usize,
    pub exits: usize,
    pub unique_ips: usize,
}

pub fn summarize(records: &[ClockRecord]) -> Summary {
    let unique_ips: HashSet<&str> = records.iter().map(|r| r.ip.as_str()).collect();
    Summary {
        total: records.len(),
        entries: records.iter().filter(|r| r.direction.is_entry()).count(),
        exits: records.iter().filter(|r| r.direction.is_exit()).count(),
        unique_ips: unique_ips.len(),
    }
}

/// Most recent punches first.
pub fn sort_recent_first(records: &mut [ClockRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_token::DayToken;
    use crate::models::direction::Direction;
    use crate::models::record::ADDRESS_UNAVAILABLE;
    use chrono::NaiveDate;

    fn record(ip: &str, direction: Direction) -> ClockRecord {
        ClockRecord::new(
            ip.to_string(),
            None,
            ADDRESS_UNAVAILABLE.to_string(),
            direction,
            DayToken::for_date(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()),
        )
    }

    #[test]
    fn counts_entries_exits_and_distinct_ips() {
        let records = vec![
            record("203.0.113.5", Direction::Entree),
            record("203.0.113.5", Direction::Sortie),
            record("198.51.100.7", Direction::Entree),
        ];
        let summary = summarize(&records);
        assert_eq!(
            summary,
            Summary {
                total: 3,
                entries: 2,
                exits: 1,
                unique_ips: 2,
            }
        );
    }

    #[test]
    fn empty_store_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.unique_ips, 0);
    }

    #[test]
    fn sorts_most_recent_first() {
        let mut records = vec![
            record("203.0.113.5", Direction::Entree),
            record("198.51.100.7", Direction::Entree),
        ];
        // Force distinct, out-of-order timestamps.
        records[0].timestamp = records[0].timestamp - chrono::Duration::hours(2);
        sort_recent_first(&mut records);
        assert_eq!(records[0].ip, "198.51.100.7");
        assert!(records[0].timestamp >= records[1].timestamp);
    }
}
