use crate::models::{PerformanceScoreResult, ScoreBreakdown, ScoreTier, UserMetrics};

use super::normalize::{normalize, normalize_percentage, round_dp};
use super::weights::{ScoringWeights, WEIGHTS};

/// Compute the 0-100 performance score for `metrics`.
///
/// Each component is weighted and rounded to two decimals before the sum;
/// the sum is then rounded to one decimal. Pure and infallible: bad input
/// only ever lowers a component to zero.
pub fn calculate_score(metrics: &UserMetrics) -> PerformanceScoreResult {
    let breakdown = calculate_breakdown(metrics, &WEIGHTS);
    let final_score = round_dp(breakdown.total(), 1);
    let tier = ScoreTier::from_score(final_score);

    PerformanceScoreResult {
        final_score,
        breakdown,
        tier,
        tier_color: tier.color(),
    }
}

fn calculate_breakdown(metrics: &UserMetrics, weights: &ScoringWeights) -> ScoreBreakdown {
    let rating = normalize(metrics.rating, metrics.max_rating);
    let contests = normalize(metrics.contests_participated, metrics.max_contests);
    let frequency = normalize(metrics.streak_days, metrics.max_streak);
    let upsolve = normalize(metrics.upsolve_count, metrics.max_upsolve);
    let total_problems = normalize(metrics.total_problems, metrics.max_problems);
    let topics = normalize(metrics.topics_covered, metrics.max_topics);
    let accuracy = normalize_percentage(metrics.accuracy);
    let virtual_performance = normalize_percentage(metrics.virtual_performance);

    ScoreBreakdown {
        rating: weighted(rating, weights.rating),
        contests: weighted(contests, weights.contests),
        frequency: weighted(frequency, weights.frequency),
        upsolve: weighted(upsolve, weights.upsolve),
        total_problems: weighted(total_problems, weights.total_problems),
        topics: weighted(topics, weights.topics),
        accuracy: weighted(accuracy, weights.accuracy),
        virtual_score: weighted(virtual_performance, weights.virtual_performance),
    }
}

fn weighted(ratio: f64, weight: f64) -> f64 {
    round_dp(ratio * weight, 2)
}
