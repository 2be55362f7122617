use crate::models::UserMetrics;

/// Report soft inconsistencies in `metrics`.
///
/// Warnings are informational only and never change what
/// `calculate_score` returns. A current value counts as provided when it is
/// present and non-zero; a maximum counts as missing when it is absent or
/// zero. Returns an empty list when nothing is inconsistent.
pub fn validate_metrics(metrics: &UserMetrics) -> Vec<String> {
    let mut warnings = Vec::new();

    let pairs = [
        (metrics.rating, metrics.max_rating, "Rating", "maxRating"),
        (
            metrics.contests_participated,
            metrics.max_contests,
            "Contests participated",
            "maxContests",
        ),
        (metrics.streak_days, metrics.max_streak, "Streak days", "maxStreak"),
        (metrics.upsolve_count, metrics.max_upsolve, "Upsolve count", "maxUpsolve"),
        (metrics.total_problems, metrics.max_problems, "Total problems", "maxProblems"),
        (metrics.topics_covered, metrics.max_topics, "Topics covered", "maxTopics"),
    ];

    for (current, max, label, max_name) in pairs {
        if is_provided(current) && !is_provided(max) {
            warnings.push(format!("{} provided but {} is missing", label, max_name));
        }
    }

    if out_of_percent_range(metrics.accuracy) {
        warnings.push("Accuracy should be between 0 and 100".to_string());
    }
    if out_of_percent_range(metrics.virtual_performance) {
        warnings.push("Virtual performance should be between 0 and 100".to_string());
    }

    warnings
}

fn is_provided(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0 && !v.is_nan())
}

fn out_of_percent_range(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v < 0.0 || v > 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;

    #[test]
    fn test_rating_without_max() {
        let metrics = UserMetrics {
            rating: Some(1200.0),
            ..Default::default()
        };
        let warnings = validate_metrics(&metrics);
        assert_eq!(warnings, vec!["Rating provided but maxRating is missing"]);
    }

    #[test]
    fn test_fully_paired_metrics() {
        let metrics = UserMetrics::new()
            .with_rating(1750.0, 3500.0)
            .with_contests(28.0, 100.0)
            .with_streak(45.0, 100.0)
            .with_upsolve(60.0, 200.0)
            .with_problems(520.0, 1500.0)
            .with_topics(15.0, 40.0)
            .with_accuracy(87.5)
            .with_virtual_performance(70.0);
        assert!(validate_metrics(&metrics).is_empty());
    }

    #[test]
    fn test_empty_metrics() {
        assert!(validate_metrics(&UserMetrics::default()).is_empty());
    }

    #[test]
    fn test_zero_max_counts_as_missing() {
        let metrics = UserMetrics::new().with_topics(12.0, 0.0);
        let warnings = validate_metrics(&metrics);
        assert_eq!(warnings, vec!["Topics covered provided but maxTopics is missing"]);
    }

    #[test]
    fn test_zero_current_is_not_flagged() {
        let metrics = UserMetrics {
            upsolve_count: Some(0.0),
            ..Default::default()
        };
        assert!(validate_metrics(&metrics).is_empty());
    }

    #[test]
    fn test_percentages_out_of_range() {
        let metrics = UserMetrics::new()
            .with_accuracy(120.0)
            .with_virtual_performance(-3.0);
        let warnings = validate_metrics(&metrics);
        assert_eq!(
            warnings,
            vec![
                "Accuracy should be between 0 and 100",
                "Virtual performance should be between 0 and 100",
            ]
        );
    }

    #[test]
    fn test_percentage_boundaries_are_valid() {
        let metrics = UserMetrics::new().with_accuracy(0.0).with_virtual_performance(100.0);
        assert!(validate_metrics(&metrics).is_empty());
    }

    #[test]
    fn test_warning_order_follows_field_order() {
        let metrics = UserMetrics {
            accuracy: Some(101.0),
            topics_covered: Some(3.0),
            rating: Some(900.0),
            streak_days: Some(4.0),
            ..Default::default()
        };
        let warnings = validate_metrics(&metrics);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].starts_with("Rating"));
        assert!(warnings[1].starts_with("Streak days"));
        assert!(warnings[2].starts_with("Topics covered"));
        assert!(warnings[3].starts_with("Accuracy"));
    }

    #[test]
    fn test_warnings_do_not_change_score() {
        let metrics = UserMetrics::new().with_accuracy(150.0);
        assert_eq!(validate_metrics(&metrics).len(), 1);
        assert_eq!(calculate_score(&metrics).breakdown.accuracy, 10.0);
    }
}
