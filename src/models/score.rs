use serde::{Deserialize, Serialize};

/// Weighted, rounded contribution of each metric to the final score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub rating: f64,
    pub contests: f64,
    pub frequency: f64,
    pub upsolve: f64,
    pub total_problems: f64,
    pub topics: f64,
    pub accuracy: f64,
    #[serde(rename = "virtual")]
    pub virtual_score: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.rating
            + self.contests
            + self.frequency
            + self.upsolve
            + self.total_problems
            + self.topics
            + self.accuracy
            + self.virtual_score
    }

    /// Components as `(label, value)` in display order.
    pub fn components(&self) -> [(&'static str, f64); 8] {
        [
            ("Rating", self.rating),
            ("Contests", self.contests),
            ("Frequency", self.frequency),
            ("Upsolve", self.upsolve),
            ("Problems", self.total_problems),
            ("Topics", self.topics),
            ("Accuracy", self.accuracy),
            ("Virtual", self.virtual_score),
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreTier {
    Beginner,     // 0-40.9
    Intermediate, // 41-70.9
    Expert,       // 71-100
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 71.0 => ScoreTier::Expert,
            s if s >= 41.0 => ScoreTier::Intermediate,
            _ => ScoreTier::Beginner,
        }
    }

    pub fn color(&self) -> TierColor {
        match self {
            ScoreTier::Expert => TierColor::Green,
            ScoreTier::Intermediate => TierColor::Yellow,
            ScoreTier::Beginner => TierColor::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Beginner => "Beginner",
            ScoreTier::Intermediate => "Intermediate",
            ScoreTier::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Red,
    Yellow,
    Green,
}

impl TierColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierColor::Red => "red",
            TierColor::Yellow => "yellow",
            TierColor::Green => "green",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TierColor::Red => "🔴",
            TierColor::Yellow => "🟡",
            TierColor::Green => "🟢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScoreResult {
    pub final_score: f64,
    pub breakdown: ScoreBreakdown,
    pub tier: ScoreTier,
    pub tier_color: TierColor,
}
