use serde::{Deserialize, Serialize};

/// Raw performance metrics for one scoring call.
///
/// Every field is optional. An absent field, an explicit zero and a negative
/// value are all distinct inputs; the scoring engine turns each of them into
/// a zero contribution, but `validate_metrics` reports them differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    // Rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,

    // Contest participation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contests_participated: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_contests: Option<f64>,

    // Activity consistency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak_days: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_streak: Option<f64>,

    // Problem solving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upsolve_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_upsolve: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_problems: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_problems: Option<f64>,

    // Topic diversity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics_covered: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_topics: Option<f64>,

    /// Submission success percentage, expected in 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,

    /// Percentile-style performance, expected in 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_performance: Option<f64>,
}

/// Reference ceilings used as normalization denominators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMaxima {
    pub max_rating: f64,
    pub max_contests: f64,
    pub max_streak: f64,
    pub max_upsolve: f64,
    pub max_problems: f64,
    pub max_topics: f64,
}

pub const DEFAULT_MAX_VALUES: ReferenceMaxima = ReferenceMaxima {
    max_rating: 3500.0,   // Codeforces Legendary Grandmaster
    max_contests: 100.0,
    max_streak: 100.0,
    max_upsolve: 200.0,
    max_problems: 1500.0, // across platforms
    max_topics: 40.0,     // distinct problem tags
};

impl Default for ReferenceMaxima {
    fn default() -> Self {
        DEFAULT_MAX_VALUES
    }
}

impl ReferenceMaxima {
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("max_rating", self.max_rating),
            ("max_contests", self.max_contests),
            ("max_streak", self.max_streak),
            ("max_upsolve", self.max_upsolve),
            ("max_problems", self.max_problems),
            ("max_topics", self.max_topics),
        ];

        for (name, value) in all {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }

        Ok(())
    }
}

impl UserMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rating(mut self, rating: f64, max_rating: f64) -> Self {
        self.rating = Some(rating);
        self.max_rating = Some(max_rating);
        self
    }

    pub fn with_contests(mut self, participated: f64, max_contests: f64) -> Self {
        self.contests_participated = Some(participated);
        self.max_contests = Some(max_contests);
        self
    }

    pub fn with_streak(mut self, streak_days: f64, max_streak: f64) -> Self {
        self.streak_days = Some(streak_days);
        self.max_streak = Some(max_streak);
        self
    }

    pub fn with_upsolve(mut self, upsolve_count: f64, max_upsolve: f64) -> Self {
        self.upsolve_count = Some(upsolve_count);
        self.max_upsolve = Some(max_upsolve);
        self
    }

    pub fn with_problems(mut self, total_problems: f64, max_problems: f64) -> Self {
        self.total_problems = Some(total_problems);
        self.max_problems = Some(max_problems);
        self
    }

    pub fn with_topics(mut self, topics_covered: f64, max_topics: f64) -> Self {
        self.topics_covered = Some(topics_covered);
        self.max_topics = Some(max_topics);
        self
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    pub fn with_virtual_performance(mut self, virtual_performance: f64) -> Self {
        self.virtual_performance = Some(virtual_performance);
        self
    }

    /// Fill every absent maximum from `maxima`. Maxima already present,
    /// including an explicit zero, are left untouched.
    pub fn with_reference_maxima(mut self, maxima: &ReferenceMaxima) -> Self {
        self.max_rating.get_or_insert(maxima.max_rating);
        self.max_contests.get_or_insert(maxima.max_contests);
        self.max_streak.get_or_insert(maxima.max_streak);
        self.max_upsolve.get_or_insert(maxima.max_upsolve);
        self.max_problems.get_or_insert(maxima.max_problems);
        self.max_topics.get_or_insert(maxima.max_topics);
        self
    }

    /// Overlay every field that is present in `other` onto `self`.
    pub fn overlay(&mut self, other: &UserMetrics) {
        fn take(dst: &mut Option<f64>, src: Option<f64>) {
            if src.is_some() {
                *dst = src;
            }
        }

        take(&mut self.rating, other.rating);
        take(&mut self.max_rating, other.max_rating);
        take(&mut self.contests_participated, other.contests_participated);
        take(&mut self.max_contests, other.max_contests);
        take(&mut self.streak_days, other.streak_days);
        take(&mut self.max_streak, other.max_streak);
        take(&mut self.upsolve_count, other.upsolve_count);
        take(&mut self.max_upsolve, other.max_upsolve);
        take(&mut self.total_problems, other.total_problems);
        take(&mut self.max_problems, other.max_problems);
        take(&mut self.topics_covered, other.topics_covered);
        take(&mut self.max_topics, other.max_topics);
        take(&mut self.accuracy, other.accuracy);
        take(&mut self.virtual_performance, other.virtual_performance);
    }
}
