use std::collections::HashSet;

use crate::{
    analytics::{activity::longest_daily_streak, problems::ProblemStats},
    models::{
        codeforces::{CodeforcesUser, RatingChange, Submission},
        leetcode::{ContestRanking, LeetCodeProfile, LeetCodeSubmission},
        ReferenceMaxima, UserMetrics,
    },
};

/// Build scoring input from a fetched Codeforces profile.
pub fn metrics_from_codeforces(
    user: &CodeforcesUser,
    history: &[RatingChange],
    submissions: &[Submission],
    maxima: &ReferenceMaxima,
) -> UserMetrics {
    let stats = ProblemStats::from_submissions(submissions);

    let mut metrics = UserMetrics {
        rating: user.rating.map(|r| r as f64),
        contests_participated: Some(history.len() as f64),
        streak_days: Some(longest_daily_streak(submissions.iter().map(|s| s.creation_time_seconds)) as f64),
        upsolve_count: Some(upsolve_count(history, submissions) as f64),
        total_problems: Some(stats.unique_solved as f64),
        topics_covered: Some(stats.distinct_tags as f64),
        ..UserMetrics::default()
    };

    if !submissions.is_empty() {
        metrics.accuracy = Some(stats.acceptance_rate);
    }

    metrics.with_reference_maxima(maxima)
}

/// Distinct problems solved in practice mode after the user was rated in
/// the contest they belong to.
pub fn upsolve_count(history: &[RatingChange], submissions: &[Submission]) -> usize {
    let rated: HashSet<i64> = history.iter().map(|c| c.contest_id).collect();
    let mut solved = HashSet::new();

    submissions
        .iter()
        .filter(|s| s.is_accepted() && s.author.is_practice())
        .filter(|s| s.problem.contest_id.map_or(false, |id| rated.contains(&id)))
        .filter(|s| solved.insert(s.problem.key()))
        .count()
}

/// Build scoring input from a fetched LeetCode profile.
pub fn metrics_from_leetcode(
    profile: &LeetCodeProfile,
    ranking: Option<&ContestRanking>,
    recent: &[LeetCodeSubmission],
    maxima: &ReferenceMaxima,
) -> UserMetrics {
    let mut metrics = UserMetrics {
        total_problems: Some(profile.stats.total_solved as f64),
        streak_days: Some(longest_daily_streak(recent.iter().filter_map(|s| s.timestamp_seconds())) as f64),
        ..UserMetrics::default()
    };

    if let Some(ranking) = ranking {
        metrics.rating = Some(ranking.rating);
        metrics.contests_participated = Some(ranking.attended_contests_count as f64);
        metrics.virtual_performance = Some((100.0 - ranking.top_percentage).max(0.0));
    }

    if !recent.is_empty() {
        let accepted = recent.iter().filter(|s| s.is_accepted()).count();
        metrics.accuracy = Some(accepted as f64 / recent.len() as f64 * 100.0);
    }

    metrics.with_reference_maxima(maxima)
}
