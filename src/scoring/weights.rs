use serde::Serialize;

/// Points each metric can contribute to the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub rating: f64,
    pub contests: f64,
    pub frequency: f64,
    pub upsolve: f64,
    pub total_problems: f64,
    pub topics: f64,
    pub accuracy: f64,
    pub virtual_performance: f64,
}

/// The weight table. Must sum to exactly 100.
pub const WEIGHTS: ScoringWeights = ScoringWeights {
    rating: 25.0,
    contests: 15.0,
    frequency: 10.0,
    upsolve: 10.0,
    total_problems: 15.0,
    topics: 10.0,
    accuracy: 10.0,
    virtual_performance: 5.0,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        WEIGHTS
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.rating
            + self.contests
            + self.frequency
            + self.upsolve
            + self.total_problems
            + self.topics
            + self.accuracy
            + self.virtual_performance
    }

    /// Weights as `(label, weight)` in breakdown order.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("Rating", self.rating),
            ("Contests", self.contests),
            ("Frequency", self.frequency),
            ("Upsolve", self.upsolve),
            ("Problems", self.total_problems),
            ("Topics", self.topics),
            ("Accuracy", self.accuracy),
            ("Virtual", self.virtual_performance),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_100() {
        assert_eq!(WEIGHTS.total(), 100.0);
    }

    #[test]
    fn test_weights_are_positive() {
        for (label, weight) in WEIGHTS.entries() {
            assert!(weight > 0.0, "{} weight must be positive", label);
        }
    }
}
