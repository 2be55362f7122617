use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::codeforces::{Contest, RatingChange};

const RECENT_CONTESTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentContest {
    pub contest_id: i64,
    pub contest_name: String,
    pub rank: i64,
    pub old_rating: i64,
    pub new_rating: i64,
    pub delta: i64,
    pub date: Option<NaiveDate>,
}

/// One point of the rating-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    /// 1-based position in the rated history.
    pub contest_number: usize,
    pub rating: i64,
    pub contest_name: String,
    pub date: Option<NaiveDate>,
    pub rank: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSummary {
    pub contests: usize,
    pub current_rating: Option<i64>,
    pub peak_rating: Option<i64>,
    pub best_rank: Option<i64>,
    pub net_delta: i64,
}

fn utc_date(seconds: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.date_naive())
}

/// The most recent rated contests, newest first.
pub fn recent_contests(history: &[RatingChange]) -> Vec<RecentContest> {
    history
        .iter()
        .rev()
        .take(RECENT_CONTESTS)
        .map(|change| RecentContest {
            contest_id: change.contest_id,
            contest_name: change.contest_name.clone(),
            rank: change.rank,
            old_rating: change.old_rating,
            new_rating: change.new_rating,
            delta: change.delta(),
            date: utc_date(change.rating_update_time_seconds),
        })
        .collect()
}

pub fn rating_chart(history: &[RatingChange]) -> Vec<RatingPoint> {
    history
        .iter()
        .enumerate()
        .map(|(i, change)| RatingPoint {
            contest_number: i + 1,
            rating: change.new_rating,
            contest_name: change.contest_name.clone(),
            date: utc_date(change.rating_update_time_seconds),
            rank: change.rank,
        })
        .collect()
}

pub fn contest_summary(history: &[RatingChange]) -> ContestSummary {
    ContestSummary {
        contests: history.len(),
        current_rating: history.last().map(|c| c.new_rating),
        peak_rating: history.iter().map(|c| c.new_rating).max(),
        best_rank: history.iter().map(|c| c.rank).min(),
        net_delta: history.iter().map(RatingChange::delta).sum(),
    }
}

/// A scheduled contest that has not started yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingContest {
    pub contest_id: i64,
    pub name: String,
    pub contest_type: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Contests in the `BEFORE` phase, soonest first, capped at `limit`.
/// Contests without a start time are skipped.
pub fn upcoming_contests(contests: &[Contest], limit: usize) -> Vec<UpcomingContest> {
    let mut upcoming: Vec<UpcomingContest> = contests
        .iter()
        .filter(|contest| contest.phase == "BEFORE")
        .filter_map(|contest| {
            let starts_at = DateTime::from_timestamp(contest.start_time_seconds?, 0)?;
            Some(UpcomingContest {
                contest_id: contest.id,
                name: contest.name.clone(),
                contest_type: contest.contest_type.clone(),
                starts_at,
                duration_minutes: contest.duration_seconds / 60,
            })
        })
        .collect();

    upcoming.sort_by_key(|contest| contest.starts_at);
    upcoming.truncate(limit);
    upcoming
}
