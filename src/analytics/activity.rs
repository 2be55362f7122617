use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};

/// Longest run of consecutive UTC calendar days containing at least one
/// timestamp. Timestamps are unix seconds in any order.
pub fn longest_daily_streak<I>(timestamps: I) -> u32
where
    I: IntoIterator<Item = i64>,
{
    let days: BTreeSet<NaiveDate> = timestamps
        .into_iter()
        .filter_map(|ts| DateTime::from_timestamp(ts, 0))
        .map(|dt| dt.date_naive())
        .collect();

    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        current = match previous.and_then(|p| p.succ_opt()) {
            Some(next) if next == day => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const BASE: i64 = 1_700_000_000;

    #[test]
    fn test_no_activity() {
        assert_eq!(longest_daily_streak(Vec::new()), 0);
    }

    #[test]
    fn test_same_day_counts_once() {
        assert_eq!(longest_daily_streak(vec![BASE, BASE + 60, BASE + 120]), 1);
    }

    #[test]
    fn test_longest_run_wins() {
        let timestamps = vec![
            BASE,
            BASE + DAY,
            // gap
            BASE + 5 * DAY,
            BASE + 6 * DAY,
            BASE + 7 * DAY,
            BASE + 8 * DAY,
        ];
        assert_eq!(longest_daily_streak(timestamps), 4);
    }

    #[test]
    fn test_unordered_input() {
        let timestamps = vec![BASE + 2 * DAY, BASE, BASE + DAY, BASE + DAY + 5];
        assert_eq!(longest_daily_streak(timestamps), 3);
    }

    #[test]
    fn test_utc_day_boundary() {
        // 23:59:59 and 00:00:00 the next day
        let midnight = 1_699_920_000;
        assert_eq!(longest_daily_streak(vec![midnight - 1, midnight]), 2);
    }
}
