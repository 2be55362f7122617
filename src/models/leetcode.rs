use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeetCodeUser {
    pub username: String,
    pub avatar: String,
    pub ranking: i64,
    pub reputation: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeetCodeStats {
    pub total_solved: i64,
    pub total_questions: i64,
    pub easy_solved: i64,
    pub medium_solved: i64,
    pub hard_solved: i64,
    /// Share of the question bank solved, as a percentage.
    pub acceptance_rate: f64,
    pub ranking: i64,
}

impl LeetCodeStats {
    pub fn solved(&self, difficulty: Difficulty) -> i64 {
        match difficulty {
            Difficulty::Easy => self.easy_solved,
            Difficulty::Medium => self.medium_solved,
            Difficulty::Hard => self.hard_solved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeetCodeProfile {
    pub user: LeetCodeUser,
    pub stats: LeetCodeStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestRanking {
    pub rating: f64,
    pub global_ranking: i64,
    pub attended_contests_count: i64,
    pub top_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeSubmission {
    pub title: String,
    pub title_slug: String,
    /// Unix seconds, sent as a string.
    pub timestamp: String,
    pub status_display: String,
    pub lang: String,
}

impl LeetCodeSubmission {
    pub fn is_accepted(&self) -> bool {
        self.status_display == "Accepted"
    }

    pub fn timestamp_seconds(&self) -> Option<i64> {
        self.timestamp.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
