use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    analytics::{
        contest_summary, metrics_from_codeforces, metrics_from_leetcode, rating_chart, recent_contests,
        upcoming_contests, ContestSummary, ProblemStats, RatingPoint, RecentContest, UpcomingContest,
    },
    config::ApiSettings,
    models::{
        codeforces::{CodeforcesUser, RatingChange, Submission},
        leetcode::{ContestRanking, LeetCodeProfile, LeetCodeSubmission},
        CpScoreError, PerformanceScoreResult, ReferenceMaxima, Result, UserMetrics,
    },
    platforms::{CodeforcesApi, LeetCodeApi},
    scoring::calculate_score,
};

/// Everything shown for one Codeforces handle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesSnapshot {
    pub user: CodeforcesUser,
    pub rating_history: Vec<RatingChange>,
    pub submissions: Vec<Submission>,
    pub problem_stats: ProblemStats,
    pub recent_contests: Vec<RecentContest>,
    pub rating_chart: Vec<RatingPoint>,
    pub contest_summary: ContestSummary,
    pub metrics: UserMetrics,
    pub score: PerformanceScoreResult,
}

/// Everything shown for one LeetCode username.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeSnapshot {
    pub profile: LeetCodeProfile,
    pub contest_ranking: Option<ContestRanking>,
    pub recent_submissions: Vec<LeetCodeSubmission>,
    pub metrics: UserMetrics,
    pub score: PerformanceScoreResult,
}

fn clean_identifier(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CpScoreError::InvalidInput("handle must not be empty".to_string()));
    }
    Ok(trimmed)
}

/// Fetch profile, rating history and submissions concurrently. Any failure
/// fails the whole fetch.
pub async fn fetch_codeforces(
    api: &dyn CodeforcesApi,
    handle: &str,
    settings: &ApiSettings,
    maxima: &ReferenceMaxima,
) -> Result<CodeforcesSnapshot> {
    let handle = clean_identifier(handle)?;

    let (user, rating_history, submissions) = tokio::try_join!(
        api.get_user_info(handle),
        api.get_user_rating(handle),
        api.get_user_submissions(handle, 1, settings.submission_count),
    )?;

    debug!(
        "Codeforces {}: {} rated contests, {} submissions",
        handle,
        rating_history.len(),
        submissions.len()
    );

    let metrics = metrics_from_codeforces(&user, &rating_history, &submissions, maxima);
    let score = calculate_score(&metrics);

    Ok(CodeforcesSnapshot {
        problem_stats: ProblemStats::from_submissions(&submissions),
        recent_contests: recent_contests(&rating_history),
        rating_chart: rating_chart(&rating_history),
        contest_summary: contest_summary(&rating_history),
        user,
        rating_history,
        submissions,
        metrics,
        score,
    })
}

/// Scheduled Codeforces contests that have not started, soonest first.
pub async fn fetch_upcoming_contests(api: &dyn CodeforcesApi, limit: usize) -> Result<Vec<UpcomingContest>> {
    let contests = api.get_contest_list().await?;
    let upcoming = upcoming_contests(&contests, limit);

    debug!("Codeforces contest list: {} contests, {} upcoming", contests.len(), upcoming.len());
    Ok(upcoming)
}

async fn contest_ranking_or_none(api: &dyn LeetCodeApi, username: &str) -> Result<Option<ContestRanking>> {
    match api.get_user_contest_ranking(username).await {
        Ok(ranking) => Ok(ranking),
        Err(e) => {
            warn!("LeetCode contest ranking unavailable for {}: {}", username, e);
            Ok(None)
        }
    }
}

async fn recent_submissions_or_empty(
    api: &dyn LeetCodeApi,
    username: &str,
    limit: u32,
) -> Result<Vec<LeetCodeSubmission>> {
    match api.get_recent_submissions(username, limit).await {
        Ok(submissions) => Ok(submissions),
        Err(e) => {
            warn!("LeetCode recent submissions unavailable for {}: {}", username, e);
            Ok(Vec::new())
        }
    }
}

/// Fetch profile, contest ranking and recent submissions concurrently.
///
/// Only the profile is required. A failed ranking call is treated as no
/// contest history and a failed submissions call as no recent activity.
pub async fn fetch_leetcode(
    api: &dyn LeetCodeApi,
    username: &str,
    settings: &ApiSettings,
    maxima: &ReferenceMaxima,
) -> Result<LeetCodeSnapshot> {
    let username = clean_identifier(username)?;

    let (profile, contest_ranking, recent_submissions) = tokio::try_join!(
        api.get_user_profile(username),
        contest_ranking_or_none(api, username),
        recent_submissions_or_empty(api, username, settings.recent_submission_limit),
    )?;

    debug!(
        "LeetCode {}: {} solved, ranked={}",
        username,
        profile.stats.total_solved,
        contest_ranking.is_some()
    );

    let metrics = metrics_from_leetcode(&profile, contest_ranking.as_ref(), &recent_submissions, maxima);
    let score = calculate_score(&metrics);

    Ok(LeetCodeSnapshot {
        profile,
        contest_ranking,
        recent_submissions,
        metrics,
        score,
    })
}
