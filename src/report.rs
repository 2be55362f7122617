//! Plain-text rendering for the CLI.

use std::fmt::Write;

use crate::{
    analytics::{TagCount, UpcomingContest},
    dashboard::{CodeforcesSnapshot, LeetCodeSnapshot},
    models::{codeforces::RankClass, leetcode::Difficulty, PerformanceScoreResult},
    scoring::ScoringWeights,
};

/// Final score, tier and per-component breakdown.
pub fn format_score(result: &PerformanceScoreResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Performance Score ===");
    let _ = writeln!(
        out,
        "Score: {:.1}/100  {} {} ({})",
        result.final_score,
        result.tier_color.emoji(),
        result.tier,
        result.tier_color.as_str()
    );
    let _ = writeln!(out, "\nBreakdown:");
    for (label, value) in result.breakdown.components() {
        let _ = writeln!(out, "  {:<10} {:>6.2}", label, value);
    }
    out
}

pub fn format_warnings(warnings: &[String]) -> String {
    if warnings.is_empty() {
        return "No warnings.\n".to_string();
    }

    let mut out = format!("{} warning(s):\n", warnings.len());
    for warning in warnings {
        let _ = writeln!(out, "  - {}", warning);
    }
    out
}

pub fn format_weights(weights: &ScoringWeights) -> String {
    let mut out = String::from("Metric      Weight\n");
    for (label, weight) in weights.entries() {
        let _ = writeln!(out, "{:<10} {:>7.0}", label, weight);
    }
    let _ = writeln!(out, "{:<10} {:>7.0}", "Total", weights.total());
    out
}

fn format_tags(tags: &[TagCount]) -> String {
    tags.iter()
        .map(|t| format!("{} ({})", t.tag, t.count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_codeforces(snapshot: &CodeforcesSnapshot) -> String {
    let user = &snapshot.user;
    let stats = &snapshot.problem_stats;
    let mut out = String::new();

    let _ = writeln!(out, "=== Codeforces: {} ===", user.handle);
    match (user.rating, user.rank.as_deref()) {
        (Some(rating), Some(rank)) => {
            let _ = writeln!(out, "Rating: {} ({}, {})", rating, rank, RankClass::from_rank(rank).as_str());
        }
        _ => {
            let _ = writeln!(out, "Rating: unrated");
        }
    }
    if let Some(max_rating) = user.max_rating {
        let _ = writeln!(out, "Max rating: {}", max_rating);
    }

    let _ = writeln!(
        out,
        "Solved: {} unique  Submissions: {}  Acceptance: {:.1}%",
        stats.unique_solved, stats.total_submissions, stats.acceptance_rate
    );
    if !stats.tag_distribution.is_empty() {
        let _ = writeln!(out, "Top tags: {}", format_tags(&stats.tag_distribution));
    }
    if !stats.difficulty_distribution.is_empty() {
        let buckets = stats
            .difficulty_distribution
            .iter()
            .map(|d| format!("{}: {}", d.range, d.count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Difficulty: {}", buckets);
    }

    let summary = &snapshot.contest_summary;
    let _ = writeln!(out, "Contests: {}  Net delta: {:+}", summary.contests, summary.net_delta);
    if let Some(best_rank) = summary.best_rank {
        let _ = writeln!(out, "Best rank: {}", best_rank);
    }
    if !snapshot.recent_contests.is_empty() {
        let _ = writeln!(out, "\nRecent contests:");
        for contest in &snapshot.recent_contests {
            let date = contest
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                out,
                "  {}  {:<40} rank {:>6}  {:>5} ({:+})",
                date, contest.contest_name, contest.rank, contest.new_rating, contest.delta
            );
        }
    }

    out.push('\n');
    out.push_str(&format_score(&snapshot.score));
    out
}

pub fn format_leetcode(snapshot: &LeetCodeSnapshot) -> String {
    let profile = &snapshot.profile;
    let mut out = String::new();

    let _ = writeln!(out, "=== LeetCode: {} ===", profile.user.username);
    let _ = writeln!(out, "Global ranking: {}", profile.user.ranking);
    let _ = writeln!(
        out,
        "Solved: {}/{} ({:.1}% of all questions)",
        profile.stats.total_solved, profile.stats.total_questions, profile.stats.acceptance_rate
    );
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let _ = writeln!(out, "  {:<7} {}", difficulty.as_str(), profile.stats.solved(difficulty));
    }

    match &snapshot.contest_ranking {
        Some(ranking) => {
            let _ = writeln!(
                out,
                "Contest rating: {:.0}  Attended: {}  Top {:.2}%",
                ranking.rating, ranking.attended_contests_count, ranking.top_percentage
            );
        }
        None => {
            let _ = writeln!(out, "Contest rating: no contests attended");
        }
    }

    if !snapshot.recent_submissions.is_empty() {
        let _ = writeln!(out, "\nRecent submissions:");
        for submission in &snapshot.recent_submissions {
            let _ = writeln!(
                out,
                "  {:<40} {:<20} {}",
                submission.title, submission.status_display, submission.lang
            );
        }
    }

    out.push('\n');
    out.push_str(&format_score(&snapshot.score));
    out
}

pub fn format_upcoming(contests: &[UpcomingContest]) -> String {
    if contests.is_empty() {
        return "No upcoming contests.\n".to_string();
    }

    let mut out = String::from("=== Upcoming Codeforces contests ===\n");
    for contest in contests {
        let _ = writeln!(
            out,
            "  {}  {:<50} {:>4} min  #{}",
            contest.starts_at.format("%Y-%m-%d %H:%M UTC"),
            contest.name,
            contest.duration_minutes,
            contest.contest_id
        );
    }
    out
}
