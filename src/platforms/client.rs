use async_trait::async_trait;

use crate::config::ApiSettings;
use crate::models::{
    codeforces::{CodeforcesUser, Contest, RatingChange, Submission},
    leetcode::{ContestRanking, LeetCodeProfile, LeetCodeSubmission},
    Result,
};

#[async_trait]
pub trait CodeforcesApi: Send + Sync {
    /// Public profile for a handle
    async fn get_user_info(&self, handle: &str) -> Result<CodeforcesUser>;

    /// Rated contest history, oldest first
    async fn get_user_rating(&self, handle: &str) -> Result<Vec<RatingChange>>;

    /// Submissions, newest first, starting at the 1-based index `from`
    async fn get_user_submissions(&self, handle: &str, from: u32, count: u32) -> Result<Vec<Submission>>;

    /// All non-gym contests
    async fn get_contest_list(&self) -> Result<Vec<Contest>>;
}

#[async_trait]
pub trait LeetCodeApi: Send + Sync {
    async fn get_user_profile(&self, username: &str) -> Result<LeetCodeProfile>;

    /// `None` when the user has never taken part in a contest.
    async fn get_user_contest_ranking(&self, username: &str) -> Result<Option<ContestRanking>>;

    async fn get_recent_submissions(&self, username: &str, limit: u32) -> Result<Vec<LeetCodeSubmission>>;
}

/// Configuration for platform clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn codeforces(api: &ApiSettings) -> Self {
        Self {
            base_url: api.codeforces_base_url.trim_end_matches('/').to_string(),
            timeout_seconds: api.timeout_seconds,
        }
    }

    pub fn leetcode(api: &ApiSettings) -> Self {
        Self {
            base_url: api.leetcode_graphql_url.clone(),
            timeout_seconds: api.timeout_seconds,
        }
    }

    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.timeout_seconds))
            .user_agent(concat!("cp_scorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| crate::models::CpScoreError::ConfigError(format!("Failed to create HTTP client: {}", e)))
    }
}
