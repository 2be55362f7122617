use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{
    models::{
        leetcode::{ContestRanking, LeetCodeProfile, LeetCodeStats, LeetCodeSubmission, LeetCodeUser},
        CpScoreError, Platform, Result,
    },
    platforms::{client::ClientConfig, LeetCodeApi},
};

const PROFILE_QUERY: &str = r#"
query userPublicProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      ranking
      userAvatar
      reputation
    }
    submitStats: submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
  allQuestionsCount {
    difficulty
    count
  }
}"#;

const CONTEST_RANKING_QUERY: &str = r#"
query userContestRanking($username: String!) {
  userContestRanking(username: $username) {
    rating
    globalRanking
    attendedContestsCount
    topPercentage
  }
}"#;

const RECENT_SUBMISSIONS_QUERY: &str = r#"
query recentSubmissions($username: String!, $limit: Int!) {
  recentSubmissionList(username: $username, limit: $limit) {
    title
    titleSlug
    timestamp
    statusDisplay
    lang
  }
}"#;

/// LeetCode GraphQL client.
pub struct LeetCodeClient {
    http_client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
    matched_user: Option<MatchedUser>,
    #[serde(default)]
    all_questions_count: Vec<DifficultyCount>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    username: String,
    profile: RawProfile,
    submit_stats: SubmitStats,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    ranking: Option<i64>,
    user_avatar: Option<String>,
    reputation: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    #[serde(default)]
    ac_submission_num: Vec<DifficultyCount>,
}

#[derive(Deserialize)]
struct DifficultyCount {
    difficulty: String,
    count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContestRankingData {
    user_contest_ranking: Option<RawContestRanking>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContestRanking {
    rating: Option<f64>,
    global_ranking: Option<i64>,
    attended_contests_count: Option<i64>,
    top_percentage: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecentSubmissionsData {
    recent_submission_list: Option<Vec<LeetCodeSubmission>>,
}

impl LeetCodeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http_client: config.http_client()?,
            endpoint: config.base_url,
        })
    }

    async fn post_query(&self, operation: &str, query: &str, variables: serde_json::Value) -> Result<String> {
        debug!("POST {} operation={}", self.endpoint, operation);

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CpScoreError::api(
                Platform::LeetCode,
                format!("Failed to fetch LeetCode data: HTTP {}", status.as_u16()),
            ));
        }

        Ok(response.text().await?)
    }
}

fn decode_response<T: DeserializeOwned>(body: &str) -> Result<GraphQlResponse<T>> {
    Ok(serde_json::from_str(body)?)
}

fn count_for(counts: &[DifficultyCount], difficulty: &str) -> i64 {
    counts
        .iter()
        .find(|c| c.difficulty == difficulty)
        .map(|c| c.count)
        .unwrap_or(0)
}

pub(crate) fn parse_profile(username: &str, body: &str) -> Result<LeetCodeProfile> {
    let response: GraphQlResponse<ProfileData> = decode_response(body)?;

    // LeetCode reports unknown users as a GraphQL error
    if !response.errors.is_empty() {
        debug!("LeetCode profile errors: {:?}", response.errors.iter().map(|e| &e.message).collect::<Vec<_>>());
        return Err(CpScoreError::not_found(Platform::LeetCode, username));
    }

    let data = response
        .data
        .ok_or_else(|| CpScoreError::not_found(Platform::LeetCode, username))?;
    let matched = data
        .matched_user
        .ok_or_else(|| CpScoreError::not_found(Platform::LeetCode, username))?;

    let solved = &matched.submit_stats.ac_submission_num;
    let total_solved = count_for(solved, "All");
    let total_questions = count_for(&data.all_questions_count, "All");
    let ranking = matched.profile.ranking.unwrap_or(0);

    let acceptance_rate = if total_questions > 0 {
        total_solved as f64 / total_questions as f64 * 100.0
    } else {
        0.0
    };

    Ok(LeetCodeProfile {
        user: LeetCodeUser {
            username: matched.username,
            avatar: matched.profile.user_avatar.unwrap_or_default(),
            ranking,
            reputation: matched.profile.reputation,
        },
        stats: LeetCodeStats {
            total_solved,
            total_questions,
            easy_solved: count_for(solved, "Easy"),
            medium_solved: count_for(solved, "Medium"),
            hard_solved: count_for(solved, "Hard"),
            acceptance_rate,
            ranking,
        },
    })
}

pub(crate) fn parse_contest_ranking(body: &str) -> Result<Option<ContestRanking>> {
    let response: GraphQlResponse<ContestRankingData> = decode_response(body)?;

    if let Some(error) = response.errors.first() {
        return Err(CpScoreError::api(Platform::LeetCode, error.message.clone()));
    }

    // A ranking without a rating carries nothing to score
    Ok(response
        .data
        .and_then(|d| d.user_contest_ranking)
        .and_then(|raw| {
            Some(ContestRanking {
                rating: raw.rating?.round(),
                global_ranking: raw.global_ranking.unwrap_or(0),
                attended_contests_count: raw.attended_contests_count.unwrap_or(0),
                top_percentage: raw.top_percentage.unwrap_or(100.0),
            })
        }))
}

pub(crate) fn parse_recent_submissions(body: &str) -> Result<Vec<LeetCodeSubmission>> {
    let response: GraphQlResponse<RecentSubmissionsData> = decode_response(body)?;

    if let Some(error) = response.errors.first() {
        return Err(CpScoreError::api(Platform::LeetCode, error.message.clone()));
    }

    Ok(response
        .data
        .and_then(|d| d.recent_submission_list)
        .unwrap_or_default())
}

#[async_trait]
impl LeetCodeApi for LeetCodeClient {
    async fn get_user_profile(&self, username: &str) -> Result<LeetCodeProfile> {
        let body = self
            .post_query("userPublicProfile", PROFILE_QUERY, json!({ "username": username }))
            .await?;
        parse_profile(username, &body)
    }

    async fn get_user_contest_ranking(&self, username: &str) -> Result<Option<ContestRanking>> {
        let body = self
            .post_query("userContestRanking", CONTEST_RANKING_QUERY, json!({ "username": username }))
            .await?;
        parse_contest_ranking(&body)
    }

    async fn get_recent_submissions(&self, username: &str, limit: u32) -> Result<Vec<LeetCodeSubmission>> {
        let body = self
            .post_query(
                "recentSubmissions",
                RECENT_SUBMISSIONS_QUERY,
                json!({ "username": username, "limit": limit }),
            )
            .await?;
        parse_recent_submissions(&body)
    }
}
